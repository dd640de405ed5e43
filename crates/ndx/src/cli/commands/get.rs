//! Implementation of `ndx get`.

use std::process::ExitCode;

use crate::cli::{args::GetCommand, context::CommandContext, output::print_full_record};

/// Shows one diagnosis in full, looked up by exact title.
pub fn run(ctx: &mut CommandContext, cmd: &GetCommand) -> ExitCode {
    let store = match ctx.store(cmd.store.data.as_deref()) {
        Ok(store) => store,
        Err(code) => return code,
    };

    let Some(record) = store.find_by_title(&cmd.title) else {
        eprintln!("error: no diagnosis titled '{}'", cmd.title);
        return ExitCode::FAILURE;
    };

    if cmd.json {
        return match serde_json::to_string_pretty(record) {
            Ok(json_str) => {
                println!("{json_str}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                ExitCode::FAILURE
            }
        };
    }

    print_full_record(record);
    ExitCode::SUCCESS
}
