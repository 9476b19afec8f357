//! Avi controller API client module
//!
//! Session-based authentication, version discovery and paginated object
//! listings against one controller.

mod client;
mod models;
mod pager;
mod query;

pub use client::AviClient;
pub use models::{CollectionPage, ControllerVersion, LoginResponse, ObjectRef};
pub use pager::ObjectPager;
pub use query::{NameFilter, ObjectQuery};
