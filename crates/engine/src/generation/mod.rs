//! The generation pipeline: schema, prompt, decoding, and the bundled
//! fallback document.

pub mod decode;
pub mod fallback;
pub mod prompt;
pub mod schema;
