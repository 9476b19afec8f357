//! Resolution of CLI arguments and prompts into a runnable job

use log::debug;
use std::path::PathBuf;

use crate::avi::NameFilter;
use crate::cli::Cli;
use crate::error::Result;
use crate::ui::Prompter;

/// Connection and filter parameters for one run
///
/// Resolved once up front and passed by reference into each stage; there is
/// no other run-wide state.
#[derive(Debug, Clone)]
pub struct ImportJob {
    pub controller: String,
    pub user: String,
    pub password: String,
    pub tenant: String,
    /// API version pinned by -x; discovered from the controller when None
    pub api_version: Option<String>,
    /// Provider version pinned by --tfversion; falls back to the API version
    pub tf_version: Option<String>,
    pub object_type: String,
    pub filter: NameFilter,
    /// Absolute path the plan artifact is written to
    pub output: PathBuf,
}

/// Resolve flags into an [`ImportJob`], prompting for anything required but absent
///
/// The controller prompt repeats until a non-empty value is supplied; the
/// password prompt is masked and also repeats until non-empty. Nothing else
/// is validated up front.
pub fn resolve_job(cli: &Cli, prompter: &dyn Prompter) -> Result<ImportJob> {
    let controller = match cli.controller.as_deref() {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => loop {
            let value = prompter.text("Controller")?;
            if !value.is_empty() {
                break value;
            }
            debug!("Empty controller input, prompting again");
        },
    };

    let password = match cli.password.as_deref() {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => {
            let prompt = format!("Password for {}@{}", cli.user, controller);
            loop {
                let value = prompter.password(&prompt)?;
                if !value.is_empty() {
                    break value;
                }
                debug!("Empty password input, prompting again");
            }
        }
    };

    let filter = NameFilter::from_args(cli.search.as_deref(), cli.names.as_deref());
    let output = std::path::absolute(&cli.filename)?;
    debug!(
        "Resolved job: {}@{} tenant={} objecttype={} output={}",
        cli.user,
        controller,
        cli.tenant,
        cli.objecttype,
        output.display()
    );

    Ok(ImportJob {
        controller,
        user: cli.user.clone(),
        password,
        tenant: cli.tenant.clone(),
        api_version: cli.apiversion.clone(),
        tf_version: cli.tfversion.clone(),
        object_type: cli.objecttype.clone(),
        filter,
        output,
    })
}
