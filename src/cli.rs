//! Command-line interface definitions

use clap::Parser;

use crate::config::defaults;

/// Generate Terraform import configuration from an Avi (NSX ALB) controller.
///
/// Discovers objects of one type on the controller, writes a main.tf with one
/// import block per object, then runs `terraform init` and `terraform plan`
/// to produce the plan artifact named by FILENAME.
#[derive(Parser, Debug)]
#[command(name = "avi2tf", version, about)]
pub struct Cli {
    /// FQDN or IP address of the Avi controller (prompted for when absent)
    #[arg(short = 'c', long, env = "AVI_CONTROLLER")]
    pub controller: Option<String>,

    /// Avi API username
    #[arg(short = 'u', long, env = "AVI_USERNAME", default_value = defaults::USER)]
    pub user: String,

    /// Avi API password (prompted for when absent)
    #[arg(short = 'p', long, env = "AVI_PASSWORD")]
    pub password: Option<String>,

    /// Tenant the listing is scoped to
    #[arg(short = 't', long, env = "AVI_TENANT", default_value = defaults::TENANT)]
    pub tenant: String,

    /// Avi API version (discovered from the controller when omitted)
    #[arg(short = 'x', long)]
    pub apiversion: Option<String>,

    /// Terraform provider version (falls back to the API version)
    #[arg(long, visible_alias = "tx")]
    pub tfversion: Option<String>,

    /// Only import objects whose name contains this string
    #[arg(short = 's', long, group = "name_filter")]
    pub search: Option<String>,

    /// Comma-separated list of object names to import
    #[arg(short = 'n', long, group = "name_filter")]
    pub names: Option<String>,

    /// Type of the object (e.g. pool, virtualservice)
    #[arg(value_name = "OBJECTTYPE")]
    pub objecttype: String,

    /// Output file for the generated plan
    #[arg(value_name = "FILENAME")]
    pub filename: String,
}
