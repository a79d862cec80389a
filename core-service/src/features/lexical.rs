//! Lexical Feature Extraction
//!
//! Surface properties of the raw URL string, computed without tokenization.

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};

/// Fixed-width lexical feature vector in [`FEATURE_LAYOUT`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalFeatures {
    pub values: [f32; FEATURE_COUNT],
}

impl LexicalFeatures {
    /// Extract features from the raw URL string.
    ///
    /// `is_https` checks the string prefix only; the bare string `"https"`
    /// counts. `subdomain_count` is the dot count minus one and goes to -1
    /// for URLs with no dot. Both are contract, not accidents.
    pub fn extract(url: &str) -> Self {
        let length = url.chars().count() as f32;
        let digit_count = url.chars().filter(|c| c.is_numeric()).count() as f32;
        let special_char_count = url.chars().filter(|c| !c.is_alphanumeric()).count() as f32;
        let is_https = if url.starts_with("https") { 1.0 } else { 0.0 };
        let subdomain_count = url.matches('.').count() as f32 - 1.0;

        Self {
            values: [length, digit_count, special_char_count, is_https, subdomain_count],
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn length(&self) -> f32 {
        self.values[0]
    }

    pub fn digit_count(&self) -> f32 {
        self.values[1]
    }

    pub fn special_char_count(&self) -> f32 {
        self.values[2]
    }

    pub fn is_https(&self) -> bool {
        self.values[3] == 1.0
    }

    pub fn subdomain_count(&self) -> f32 {
        self.values[4]
    }

    /// Feature names for this vector.
    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }
}
