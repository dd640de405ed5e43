//! Ranked multi-field search over the ndx record store.
//!
//! This crate is the search core: a [`Query`] model, a per-field relevance
//! scorer, and the [`search`] engine that filters by category, scores every
//! record across its weighted fields, and returns hits ordered by relevance.
//!
//! The engine is a pure function over the store snapshot. It holds no state
//! between calls and never mutates records; per-query match metadata travels
//! on the returned [`SearchHit`]s. Scoring constants come from
//! [`ndx_config::ScoreWeights`] so they stay tunable without touching the
//! algorithm.

#![warn(missing_docs)]

mod engine;
mod query;
mod score;
mod state;

pub use engine::{MatchAnnotation, SearchHit, search};
pub use query::Query;
pub use score::{FieldScore, score_field};
pub use state::SearchState;
