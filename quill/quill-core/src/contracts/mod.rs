macro_rules! muse {
    ($module:ident, {$($item:ident),* $(,)?}) => {
        pub mod $module;
        pub use $module::{ $($item),* };
    };
}

muse!(gemini_model, {GeminiModel});
muse!(generation_options, {GenerationOptions});
muse!(generation_request, {GenerationRequest});
muse!(generation_envelope, {GenerationEnvelope, EnvelopeCandidate, EnvelopeContent, EnvelopePart, EnvelopeUsage, PromptFeedback});

pub use generation_envelope::{envelope_error, extract_text};
pub use generation_request::prompt_to_string;
