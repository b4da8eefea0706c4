pub mod assistant;
pub mod emergency;
pub mod gemini;
pub mod prompt;
