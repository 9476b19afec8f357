//! avi2tf - Main entry point

use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::exit;

use avi2tf::config::{defaults, tf};
use avi2tf::{
    clear_spinner, create_spinner, emit_imports, resolve_job, AviClient, Cli, ImportJob,
    ObjectQuery, ProcessRunner, ProviderBlock, TerminalPrompter, TerraformCli,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(defaults::LOG_LEVEL),
    )
    .init();

    info!("Starting avi2tf v{}", env!("CARGO_PKG_VERSION"));

    let prompter = TerminalPrompter;
    let job = match resolve_job(&cli, &prompter) {
        Ok(job) => job,
        Err(e) => {
            println!("Error resolving arguments: {}", e);
            exit(1);
        }
    };

    // Resolve the API version, probing the controller when it was not pinned
    let api_version = match job.api_version.clone() {
        Some(v) => v,
        None => match discover_version(&job).await {
            Ok(v) => {
                println!("Discovered Controller version {}.", v);
                v
            }
            Err(e) => {
                println!("Error discovering Controller version: {}", e);
                exit(1);
            }
        },
    };

    // Open the session the listing runs over; it lives until process exit
    let mut client = match AviClient::new(&job.controller, &job.tenant) {
        Ok(client) => client,
        Err(e) => {
            println!("Error connecting to {}: {}", job.controller, e);
            exit(1);
        }
    };
    if let Err(e) = client
        .login(&job.user, &job.password, Some(api_version.as_str()))
        .await
    {
        println!("Error opening session: {}", e);
        exit(1);
    }

    let tf_version = job.tf_version.clone().unwrap_or_else(|| api_version.clone());

    print!("Preparing environment");
    let mut stdout = io::stdout();
    let _ = stdout.flush();

    let query = ObjectQuery {
        object_type: &job.object_type,
        filter: &job.filter,
    };
    let mut pager = client.list_objects(&query);

    let provider = ProviderBlock {
        user: &job.user,
        tenant: &job.tenant,
        password: &job.password,
        controller: &job.controller,
        api_version: &api_version,
        tf_version: &tf_version,
    };

    let count = {
        let file = match File::create(tf::MAIN_TF) {
            Ok(file) => file,
            Err(e) => {
                println!();
                println!("Error creating {}: {}", tf::MAIN_TF, e);
                exit(1);
            }
        };
        let mut out = BufWriter::new(file);
        match emit_imports(&mut out, &provider, &job.object_type, &mut pager, &mut stdout).await {
            Ok(count) => count,
            Err(e) => {
                println!();
                println!("Error writing {}: {}", tf::MAIN_TF, e);
                exit(1);
            }
        }
    };
    println!();
    debug!("Discovered {} {} objects", count, job.object_type);

    let runner = ProcessRunner;
    let terraform = TerraformCli::new(&runner, ".");

    let spinner = create_spinner("Running terraform init");
    let init_result = terraform.init();
    clear_spinner(spinner);
    if let Err(e) = init_result {
        println!("Error during terraform init: {}", e);
        exit(1);
    }
    println!("Initializing Terraform (vmware/avi {})...", tf_version);

    println!("Importing resources...");
    let spinner = create_spinner("Running terraform plan");
    let plan_result = terraform.plan(&job.output);
    clear_spinner(spinner);
    match plan_result {
        Err(e) => {
            println!("Error during terraform plan: {}", e);
            exit(1);
        }
        Ok(outcome) if !outcome.success => {
            // Reported only; the exit code stays zero
            println!("Error invoking terraform plan:");
            println!("{}", outcome.stderr);
        }
        Ok(_) => {
            println!();
            println!("Resources have been written to {}", job.output.display());
        }
    }

    info!("Completed");
}

/// Probe the controller for its API version over a throwaway session
async fn discover_version(job: &ImportJob) -> avi2tf::Result<String> {
    let mut probe = AviClient::new(&job.controller, &job.tenant)?;
    probe.probe_version(&job.user, &job.password).await
}
