//! Trust-List Filter
//!
//! Allow-list of domain suffixes exempted from classifier inference. Static
//! process-wide configuration, not editable at runtime.

/// Default trusted suffixes.
pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "example.com",
    "openai.com",
    "github.com",
];

/// Configured allow-list of trusted domain suffixes.
#[derive(Debug, Clone)]
pub struct TrustList {
    domains: Vec<String>,
}

impl TrustList {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    /// True iff the URL string ends with any configured entry.
    ///
    /// Plain suffix match, not domain-aware: "evilgoogle.com" matches a
    /// "google.com" entry. Known weakness, kept because the trained model
    /// and recorded history assume this exact behavior.
    pub fn matches(&self, url: &str) -> bool {
        self.domains.iter().any(|domain| url.ends_with(domain.as_str()))
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for TrustList {
    fn default() -> Self {
        Self::new(DEFAULT_TRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_configured_suffix() {
        let list = TrustList::default();

        assert!(list.matches("https://github.com"));
        assert!(list.matches("https://mail.google.com"));
        assert!(!list.matches("https://phish.biz"));
    }

    #[test]
    fn suffix_match_is_not_domain_aware() {
        let list = TrustList::default();

        // Coarse by contract.
        assert!(list.matches("https://evilgoogle.com"));
    }

    #[test]
    fn empty_list_matches_nothing() {
        let list = TrustList::new(Vec::new());

        assert!(list.is_empty());
        assert!(!list.matches("https://google.com"));
    }
}
