//! Matcher configuration.

/// Wildcard token used when no [`MatchConfig`] is given.
pub const DEFAULT_WILDCARD: &str = "?";

/// Settings for a match attempt.
///
/// # Example
///
/// ```
/// use sexp_ir::sexp;
/// use sexp_match::{attempt_match_with, MatchConfig};
///
/// let config = MatchConfig::with_wildcard("var");
/// assert!(attempt_match_with(&config, &sexp!(id x), &sexp!(id var), |_: &str| ()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Atom that captures instead of matching literally. Only meaningful in
    /// pattern trees; in a subject it is an ordinary atom.
    pub wildcard: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            wildcard: DEFAULT_WILDCARD.to_owned(),
        }
    }
}

impl MatchConfig {
    /// Configuration using `token` as the wildcard.
    pub fn with_wildcard(token: impl Into<String>) -> Self {
        MatchConfig {
            wildcard: token.into(),
        }
    }

    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }
}
