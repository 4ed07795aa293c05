pub mod error;
pub mod generator;
pub mod ollama;
pub mod openai;
pub mod report;

// Re-exports
pub use error::{Error, Result};
pub use generator::{build_generator, TextGenerator};
pub use ollama::OllamaClient;
pub use openai::OpenAICompatibleClient;
pub use report::ReportGenerator;
