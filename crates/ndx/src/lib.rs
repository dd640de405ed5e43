//! ndx: Nursing Diagnosis Explorer
//!
//! A terminal browser for a fixed collection of nursing-diagnosis reference
//! entries. ndx loads the collection from a JSON file once per invocation,
//! then searches it by free-text query with weighted multi-field relevance
//! ranking, filters by diagnosis category, and pages through the ranked
//! results with a compact, viewport-aware page-number bar. Matched query
//! terms are highlighted in the output.

#![warn(missing_docs)]

pub mod cli;
