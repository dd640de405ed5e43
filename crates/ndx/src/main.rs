//! Entry point for the `ndx` binary.

use std::process::ExitCode;

use ndx::cli::{args, commands, context::CommandContext};

fn main() -> ExitCode {
    let cli = args::parse_cli();

    // `init` must work even when an existing config file is broken
    let ctx = if matches!(cli.command, args::Commands::Init(_)) {
        CommandContext::load_cwd_only()
    } else {
        CommandContext::load()
    };

    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
