//! Separator configuration for flattening.

/// Default separator joining nested field names.
pub const DEFAULT_KEY_SEP: &str = ".";

/// Default separator joining values that came from one list.
pub const DEFAULT_LIST_SEP: &str = "|";

/// Flattening configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    /// Joins nested field names into a key path.
    pub key_sep: String,
    /// Joins the scalar values of a list into one string.
    pub list_sep: String,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            key_sep: DEFAULT_KEY_SEP.to_string(),
            list_sep: DEFAULT_LIST_SEP.to_string(),
        }
    }
}

impl FlattenConfig {
    /// Create a configuration with explicit separators.
    ///
    /// Any string is accepted, including the empty string. Key paths that
    /// collide as a result are reported by [`flatten`](super::flatten).
    pub fn new(key_sep: impl Into<String>, list_sep: impl Into<String>) -> Self {
        Self {
            key_sep: key_sep.into(),
            list_sep: list_sep.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separators() {
        let config = FlattenConfig::default();
        assert_eq!(config.key_sep, ".");
        assert_eq!(config.list_sep, "|");
    }

    #[test]
    fn test_explicit_separators() {
        let config = FlattenConfig::new("__", ";");
        assert_eq!(config.key_sep, "__");
        assert_eq!(config.list_sep, ";");
    }

    #[test]
    fn test_empty_separators_are_accepted() {
        let config = FlattenConfig::new("", "");
        assert!(config.key_sep.is_empty());
        assert!(config.list_sep.is_empty());
    }
}
