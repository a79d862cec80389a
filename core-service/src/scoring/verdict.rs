//! Verdict Types
//!
//! The label/risk/reason triple is only constructible through the
//! constructors below, so the three fields can never drift apart.

use serde::{Deserialize, Serialize};

use crate::classifier::LABEL_MALICIOUS;

/// Reason strings on the wire and in the history document.
pub const REASON_TRUSTED: &str = "Trusted domain (whitelisted)";
pub const REASON_MALICIOUS: &str = "Suspicious pattern";
pub const REASON_BENIGN: &str = "Looks safe";

/// Classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Benign,
    Malicious,
}

/// Risk level derived from the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Risk {
    Low,
    High,
}

/// Complete scoring outcome for one URL.
///
/// The label serializes as `prediction`, the field name the frontend reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub url: String,
    #[serde(rename = "prediction")]
    pub label: Label,
    pub risk: Risk,
    pub reason: String,
}

impl Verdict {
    /// Verdict for the trusted-domain short-circuit path.
    pub fn trusted(url: &str) -> Self {
        Self {
            url: url.to_string(),
            label: Label::Benign,
            risk: Risk::Low,
            reason: REASON_TRUSTED.to_string(),
        }
    }

    /// Verdict for a classifier label (1 malicious, 0 benign).
    pub fn from_label(url: &str, raw_label: u8) -> Self {
        if raw_label == LABEL_MALICIOUS {
            Self {
                url: url.to_string(),
                label: Label::Malicious,
                risk: Risk::High,
                reason: REASON_MALICIOUS.to_string(),
            }
        } else {
            Self {
                url: url.to_string(),
                label: Label::Benign,
                risk: Risk::Low,
                reason: REASON_BENIGN.to_string(),
            }
        }
    }
}
