pub mod error;
pub mod gemini;
pub mod message;
pub mod provider;
pub mod settings;

pub use error::LlmError;
pub use gemini::GeminiProvider;
pub use message::{Content, Part, Role};
pub use provider::{GenerationRequest, LlmProvider};
pub use settings::LlmSettings;
