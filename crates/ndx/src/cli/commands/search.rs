//! Implementation of `ndx search`.

use std::process::ExitCode;

use ndx_highlight::{Annotator, dim};
use ndx_page::plan;
use ndx_search::{Query, SearchState, search};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{JsonSearchOutput, page_bar, page_summary, print_hit_card, print_hit_line, results_summary},
};

/// Searches the collection and prints one page of ranked matches.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let weights = ctx.config.score.clone();
    let viewport = ctx.viewport(cmd.viewport);
    let page_size = cmd.page_size.unwrap_or(ctx.config.settings.page_size);

    // Page-size and filter changes reset to page 1; an explicit --page
    // lands after those transitions
    let state = SearchState::default()
        .with_category(cmd.category.unwrap_or_default())
        .with_query(cmd.query.join(" "))
        .with_page_size(page_size)
        .with_page(cmd.page.unwrap_or(1));

    let store = match ctx.store(cmd.store.data.as_deref()) {
        Ok(store) => store,
        Err(code) => return code,
    };
    let store_total = store.len();

    let query = Query::new(&state.query);
    let hits = search(store, state.category, &query, &weights);

    let total_pages = if state.page_size == 0 {
        0
    } else {
        hits.len().div_ceil(state.page_size)
    };
    let state = state.clamped(total_pages);

    let window = plan(hits.len(), state.page_size, state.page, viewport);
    let page_hits = &hits[window.start_index..window.end_index];

    if cmd.output.json {
        let json_output = JsonSearchOutput {
            query: state.query.clone(),
            category: state.category,
            total_matches: hits.len(),
            window: &window,
            results: page_hits,
        };
        return match serde_json::to_string_pretty(&json_output) {
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

    if hits.is_empty() {
        println!("{}", dim("No matching diagnoses."));
        return ExitCode::SUCCESS;
    }

    let annotator = (!cmd.output.no_highlight && !query.is_empty()).then(Annotator::new);

    if window.has_pagination() {
        println!(
            "{}",
            dim(&format!(
                "{}, {}",
                results_summary(hits.len(), store_total),
                page_summary(&window, hits.len())
            ))
        );
    } else {
        println!("{}", dim(&results_summary(hits.len(), store_total)));
    }
    println!();

    for hit in page_hits {
        if cmd.output.list {
            print_hit_line(hit, annotator.as_ref());
        } else {
            print_hit_card(hit, annotator.as_ref());
        }
    }

    if window.has_pagination() && window.total_pages > 1 {
        println!("{}", page_bar(&window));
    }

    ExitCode::SUCCESS
}
