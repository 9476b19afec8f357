/// Configuration constants for the Avi controller API
pub mod api {
    /// Session login endpoint on the controller
    pub const LOGIN_PATH: &str = "/login";

    /// Session logout endpoint on the controller
    pub const LOGOUT_PATH: &str = "/logout";

    /// Base path for object collection endpoints
    pub const BASE_PATH: &str = "/api";

    /// Fields requested for every object listing
    pub const LIST_FIELDS: &str = "uuid,name";
}

/// Default values for CLI arguments
pub mod defaults {
    /// Default API username
    pub const USER: &str = "admin";

    /// Default tenant
    pub const TENANT: &str = "admin";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Constants for the Terraform side of the pipeline
pub mod tf {
    /// File Terraform reads from the working directory
    pub const MAIN_TF: &str = "main.tf";

    /// Name of the Terraform binary
    pub const BINARY: &str = "terraform";

    /// Provider source written into the required_providers block
    pub const PROVIDER_SOURCE: &str = "AVI_providers/";

    /// Resource-type prefix used in import blocks (avi_<objecttype>)
    pub const RESOURCE_PREFIX: &str = "avi";
}
