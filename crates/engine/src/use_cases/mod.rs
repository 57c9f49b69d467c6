pub mod fetch_concept;

pub use fetch_concept::{ConceptSource, FetchConcept, FetchError, FetchedConcept};
