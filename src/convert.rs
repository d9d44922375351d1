//! Conversion pipeline and host-facing session.
//!
//! The pipeline is pure and stateless: script guard, tokenizer, per-token
//! transliteration, reassembly in input order. `ConverterSession` wraps it
//! for hosts that model keystroke updates and an explicit clear/reset.

use serde::Serialize;
use tracing::debug;

use crate::script::{self, MixedScript};
use crate::tokenizer::{tokenize, TokenKind};
use crate::transliterate::transliterate;

/// Output of a successful conversion. Constructed fresh per call; nothing
/// is cached or merged across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub output: String,
}

/// Run the full pipeline over one input.
///
/// Deterministic: the same input always yields byte-identical output.
/// The only failure is a mixed-script input, in which case conversion is
/// withheld entirely rather than partially performed.
pub fn convert(input: &str) -> Result<ConversionResult, MixedScript> {
    if let Err(err) = script::check(input) {
        debug!(spans = err.spans.len(), "mixed-script input rejected");
        return Err(err);
    }

    let tokens = tokenize(input);
    debug!(token_count = tokens.len());

    let mut output = String::with_capacity(input.len() * 2);
    for token in &tokens {
        if token.kind == TokenKind::Roman {
            output.push_str(&transliterate(token.text));
        } else {
            output.push_str(token.text);
        }
    }
    Ok(ConversionResult { output })
}

/// Stateful wrapper over the pure pipeline, matching the host UI contract:
/// every input change re-runs the pipeline from scratch, and clearing the
/// input clears the output with no residual state.
#[derive(Debug, Default)]
pub struct ConverterSession {
    input: String,
}

impl ConverterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last raw input handed to `update`.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the stored input and re-run the full pipeline.
    pub fn update(&mut self, input: &str) -> Result<ConversionResult, MixedScript> {
        self.input.clear();
        self.input.push_str(input);
        convert(&self.input)
    }

    /// Clear the stored input and yield the empty result. Equivalent to
    /// `update("")`; repeated resets are harmless.
    pub fn reset(&mut self) -> ConversionResult {
        self.input.clear();
        ConversionResult::default()
    }
}
