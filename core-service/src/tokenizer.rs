//! URL Tokenizer
//!
//! Splits a URL into word-like tokens by normalizing structural separators.
//! Must stay in lockstep with the tokenizer the vectorizer was fitted with.

/// Tokenize a URL: `"://"`, `"."`, `"-"` and `"/"` each become a space, then
/// the string is split on whitespace. Empty tokens are discarded; an empty
/// URL yields an empty sequence.
pub fn tokenize(url: &str) -> Vec<String> {
    url.replace("://", " ")
        .replace(['.', '-', '/'], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_separators() {
        assert_eq!(
            tokenize("https://sub.example.com/path"),
            vec!["https", "sub", "example", "com", "path"]
        );
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn consecutive_separators_produce_no_empty_tokens() {
        assert_eq!(tokenize("a..b//c--d"), vec!["a", "b", "c", "d"]);
        assert_eq!(tokenize("://"), Vec::<String>::new());
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(
            tokenize("http://login-verify.example.com"),
            vec!["http", "login", "verify", "example", "com"]
        );
    }
}
