//! ConceptForge Engine: requests a complete Concept Document from a
//! generative text service under a structured-output schema, falls back to a
//! bundled known-good document on any failure, and serves the result
//! read-only over HTTP.

pub mod api;
pub mod app;
pub mod generation;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
