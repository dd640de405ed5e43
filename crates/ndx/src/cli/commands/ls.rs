//! Implementation of `ndx ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use ndx_highlight::dim;
use ndx_search::{Query, search};
use serde::Serialize;

use crate::cli::{args::LsCommand, context::CommandContext};

/// One row of the JSON listing.
#[derive(Serialize)]
struct JsonLsEntry<'s> {
    /// Diagnosis title.
    title: &'s str,
    /// Derived category.
    category: &'s str,
    /// Source page, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

/// Lists diagnoses with their category and source page.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    let weights = ctx.config.score.clone();

    let store = match ctx.store(cmd.store.data.as_deref()) {
        Ok(store) => store,
        Err(code) => return code,
    };

    // An empty-query search gives the category-filtered collection in
    // title order
    let filter = cmd.category.unwrap_or_default();
    let hits = search(store, filter, &Query::new(""), &weights);

    if cmd.json {
        let entries: Vec<JsonLsEntry<'_>> = hits
            .iter()
            .map(|hit| JsonLsEntry {
                title: &hit.record.title,
                category: hit.record.category().as_str(),
                page: hit.record.page,
            })
            .collect();
        return match serde_json::to_string_pretty(&entries) {
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
        println!("{}", dim("No diagnoses in this category."));
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Title", "Category", "Page"]);
    for hit in &hits {
        let record = hit.record;
        table.add_row(vec![
            Cell::new(&record.title),
            Cell::new(record.category().to_string()),
            Cell::new(record.page.map_or(String::new(), |p| p.to_string())),
        ]);
    }
    println!("{table}");

    let (risk, readiness, actual) = store.category_counts();
    println!(
        "{}",
        dim(&format!(
            "{} listed · collection: {risk} risk, {readiness} readiness, {actual} actual",
            hits.len()
        ))
    );

    ExitCode::SUCCESS
}
