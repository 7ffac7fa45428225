//! Filter state and matching for list views

/// Filter lifecycle of a list view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    /// The user is typing a query
    Filtering(String),
    /// A query was accepted and still narrows the list
    Applied(String),
}

impl FilterState {
    /// Current query, if any
    pub fn query(&self) -> Option<&str> {
        match self {
            FilterState::Unfiltered => None,
            FilterState::Filtering(query) | FilterState::Applied(query) => Some(query),
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self, FilterState::Filtering(_))
    }
}

/// Case-insensitive subsequence match
///
/// Every character of `query` must appear in `candidate` in order, not
/// necessarily adjacent. An empty query matches everything.
pub fn matches(query: &str, candidate: &str) -> bool {
    let mut haystack = candidate.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|needle| haystack.any(|c| c == needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        assert!(matches("", "Trade"));
        assert!(matches("", ""));
    }

    #[test]
    fn test_subsequence_match() {
        assert!(matches("cfg", "Configs"));
        assert!(matches("TRD", "Trade"));
        assert!(matches("c 1", "Config 1"));
        assert!(!matches("xt", "Trade"));
    }

    #[test]
    fn test_order_matters() {
        assert!(matches("ex", "Exit"));
        assert!(!matches("xe", "Exit"));
    }

    #[test]
    fn test_query_access() {
        assert_eq!(FilterState::Unfiltered.query(), None);
        assert_eq!(FilterState::Filtering("tr".into()).query(), Some("tr"));
        assert_eq!(FilterState::Applied("v".into()).query(), Some("v"));
        assert!(FilterState::Filtering(String::new()).is_typing());
        assert!(!FilterState::Applied("v".into()).is_typing());
    }
}
