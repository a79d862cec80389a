//! Feature Layout - Centralized Feature Definition
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! The classifier's trained weights assume this exact order after the text
//! vector, so a silent layout change corrupts every prediction.

use crc32fast::Hasher;

/// Current feature layout version.
/// MUST be incremented when layout changes.
pub const FEATURE_VERSION: u8 = 1;

/// Feature names in the exact order they appear in the vector.
/// This is the SINGLE SOURCE OF TRUTH for the lexical feature layout.
pub const FEATURE_LAYOUT: &[&str] = &[
    "length",             // 0: Character count of the raw URL
    "digit_count",        // 1: Count of numeric characters
    "special_char_count", // 2: Count of non-alphanumeric characters
    "is_https",           // 3: 1.0 if the URL starts with "https"
    "subdomain_count",    // 4: Dot count minus one (may be -1)
];

/// Total number of lexical features.
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 5;

/// Compute CRC32 hash of the feature layout.
/// Used to detect layout mismatches against persisted artifacts.
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash.
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

/// Mismatch between the running layout and a persisted artifact's layout.
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Layout mismatch: expected v{} ({:x}), got v{} ({:x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate a persisted version/hash pair against the running layout.
pub fn validate_layout(version: u8, hash: u32) -> Result<(), LayoutMismatchError> {
    if version != FEATURE_VERSION || hash != layout_hash() {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: layout_hash(),
            actual_version: version,
            actual_hash: hash,
        });
    }
    Ok(())
}
