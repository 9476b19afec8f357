//! Avi controller wire models

use serde::Deserialize;

/// Object reference returned by a collection listing
#[derive(Deserialize, Debug, Clone)]
pub struct ObjectRef {
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl ObjectRef {
    /// Display name, falling back to the uuid
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.uuid)
    }
}

/// One page of an object collection response
#[derive(Deserialize, Debug)]
pub struct CollectionPage {
    /// Total object count across all pages
    #[serde(default)]
    pub count: u32,
    /// Absolute URL of the next page, when there is one
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<ObjectRef>,
}

/// Version object embedded in the login response
#[derive(Deserialize, Debug, Clone)]
pub struct ControllerVersion {
    #[serde(rename = "Version")]
    pub version: String,
}

/// Body returned by POST /login
#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub version: Option<ControllerVersion>,
}
