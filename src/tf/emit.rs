//! Generation of the Terraform configuration driving the import

use log::debug;
use std::io::Write;

use crate::avi::ObjectPager;
use crate::config::tf;
use crate::error::Result;

/// Values embedded in the provider configuration block
#[derive(Debug)]
pub struct ProviderBlock<'a> {
    pub user: &'a str,
    pub tenant: &'a str,
    pub password: &'a str,
    pub controller: &'a str,
    pub api_version: &'a str,
    /// Provider version: the --tfversion flag, else the API version
    pub tf_version: &'a str,
}

/// Write the terraform/provider boilerplate
///
/// The password lands in the file in cleartext; that is what the provider
/// block requires today.
pub fn write_provider_block(out: &mut impl Write, p: &ProviderBlock<'_>) -> std::io::Result<()> {
    writeln!(out, "terraform {{")?;
    writeln!(out, "  required_providers {{")?;
    writeln!(out, "    avi = {{")?;
    writeln!(out, "      source = \"{}\"", tf::PROVIDER_SOURCE)?;
    writeln!(out, "      version = \"{}\"", p.tf_version)?;
    writeln!(out, "    }}")?;
    writeln!(out, "  }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "provider \"avi\" {{")?;
    writeln!(out, "  avi_username    = \"{}\"", p.user)?;
    writeln!(out, "  avi_tenant      = \"{}\"", p.tenant)?;
    writeln!(out, "  avi_password    = \"{}\"", p.password)?;
    writeln!(out, "  avi_controller  = \"{}\"", p.controller)?;
    writeln!(out, "  avi_version     = \"{}\"", p.api_version)?;
    writeln!(out, "}}")?;
    writeln!(out)
}

/// Write one import block keyed by the object's uuid
pub fn write_import_block(
    out: &mut impl Write,
    object_type: &str,
    uuid: &str,
) -> std::io::Result<()> {
    writeln!(out, "import {{")?;
    writeln!(out, "  to = {}_{}.{}", tf::RESOURCE_PREFIX, object_type, uuid)?;
    writeln!(out, "  id = \"{}\"", uuid)?;
    writeln!(out, "}}")
}

/// Drain the pager into `out`: provider block, then one import block per object
///
/// Prints one `.` to `progress` per object for liveness and flushes `out`
/// before returning, so the file is complete when the subprocess phases run.
pub async fn emit_imports(
    out: &mut impl Write,
    provider: &ProviderBlock<'_>,
    object_type: &str,
    pager: &mut ObjectPager<'_>,
    progress: &mut impl Write,
) -> Result<usize> {
    write_provider_block(out, provider)?;

    let mut count = 0;
    while let Some(obj) = pager.try_next().await? {
        write!(progress, ".")?;
        progress.flush()?;
        debug!("Discovered {} ({})", obj.display_name(), obj.uuid);
        write_import_block(out, object_type, &obj.uuid)?;
        count += 1;
    }

    out.flush()?;
    Ok(count)
}
