pub mod models;
pub use models::{
    GeminiGenerateRequest,
    GeminiContent,
    GeminiPart,
    GeminiGenerationConfig,
};
