pub mod contracts;
pub mod gemini_client;
