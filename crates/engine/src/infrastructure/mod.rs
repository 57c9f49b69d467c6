pub mod gemini;
pub mod ports;
pub mod settings;
