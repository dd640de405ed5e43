//! Implementation of `ndx status`.

use std::process::ExitCode;

use ndx_config::discover_config_files;
use ndx_highlight::{dim, header, subheader, warning};

use crate::cli::{args::StatusCommand, context::CommandContext};

/// Shows configuration, effective settings, and collection statistics.
pub fn run(ctx: &mut CommandContext, cmd: &StatusCommand) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("{}", header("Configuration"));
    println!();

    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!("Run 'ndx init' to create a configuration file.");
        println!();
    } else {
        println!("{}", subheader("Config files (highest precedence first):"));
        for path in &config_files {
            println!("  {}", path.display());
        }
        println!();
    }

    let warnings = ctx.config.validate();
    if !warnings.is_empty() {
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for item in &warnings {
            println!("  - {}", warning(&item.to_string()));
        }
        println!();
    }

    println!("{}", subheader("Effective settings:"));
    for line in ctx.config.settings_to_toml().lines() {
        println!("  {line}");
    }
    println!();

    println!("{}", header("Collection"));
    println!();

    let Some(path) = ctx.try_data_path(cmd.store.data.as_deref()) else {
        println!("{}", dim("No record collection configured."));
        println!("Pass --data <FILE> or set 'data' in .ndx.toml.");
        return ExitCode::SUCCESS;
    };
    println!("  {}", path.display());

    let store = match ctx.store(cmd.store.data.as_deref()) {
        Ok(store) => store,
        Err(code) => return code,
    };

    let (risk, readiness, actual) = store.category_counts();
    println!(
        "  {}",
        dim(&format!(
            "{} diagnoses: {risk} risk, {readiness} readiness, {actual} actual",
            store.len()
        ))
    );

    ExitCode::SUCCESS
}
