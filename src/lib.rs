//! avi2tf - Generate Terraform import configuration from an Avi controller
//!
//! A one-shot tool that discovers objects of one type on an Avi (NSX ALB)
//! controller, writes a `main.tf` with one import block per object, then runs
//! `terraform init` and `terraform plan` to produce a plan artifact.
//!
//! # Features
//!
//! - Session-based controller authentication with API version auto-discovery
//! - Server-side filtering by name substring or an exact-name set
//! - Transparent pagination over the controller's collection listings
//! - Interactive prompts for a missing controller address or password
//!
//! # Example
//!
//! ```bash
//! # Import every pool, discovering the controller version
//! avi2tf -c 10.0.0.1 -u admin pool pools.plan
//!
//! # Only pools whose name contains "web"
//! avi2tf -c 10.0.0.1 -s web pool pools.plan
//!
//! # Exactly these two pools, pinning API and provider versions
//! avi2tf -c 10.0.0.1 -x 22.1.1 --tfversion 22.1.3 -n p1,p2 pool pools.plan
//! ```

pub mod avi;
pub mod cli;
pub mod config;
pub mod error;
pub mod resolve;
pub mod tf;
pub mod ui;

pub use avi::{AviClient, CollectionPage, NameFilter, ObjectPager, ObjectQuery, ObjectRef};
pub use cli::Cli;
pub use error::{AviError, Result};
pub use resolve::{resolve_job, ImportJob};
pub use tf::{
    emit_imports, CommandRunner, PlanOutcome, ProcessRunner, ProviderBlock, TerraformCli,
};
pub use ui::{clear_spinner, create_spinner, Prompter, TerminalPrompter};
