use thiserror::Error;

/// Errors that can occur during a recipe search
#[derive(Error, Debug)]
pub enum SearchError {
    /// The listing query came back empty (`meals: null` or `[]`)
    #[error("No recipes matched the query")]
    NoResults,

    /// Any transport, HTTP status or decode failure of a listing call
    #[error("Failed to fetch recipes: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

impl SearchError {
    /// Text to show the user in place of the results grid
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::NoResults => "No recipes found. Try a different ingredient or category.",
            SearchError::TransportFailure(_) => {
                "Something went wrong while fetching recipes. Please try again."
            }
            SearchError::Config(_) => "The recipe finder is misconfigured.",
            SearchError::Builder(_) => "The search could not be started.",
        }
    }

    /// Which terminal pipeline condition this error represents
    pub fn kind(&self) -> FailureKind {
        match self {
            SearchError::NoResults => FailureKind::NoResults,
            _ => FailureKind::TransportFailure,
        }
    }
}

/// The two failure conditions a finished pipeline can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NoResults,
    TransportFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_is_distinct_from_transport_failure() {
        assert_eq!(SearchError::NoResults.kind(), FailureKind::NoResults);
        assert_eq!(
            SearchError::Builder("bad".to_string()).kind(),
            FailureKind::TransportFailure
        );
        assert_ne!(
            SearchError::NoResults.user_message(),
            SearchError::Builder("bad".to_string()).user_message()
        );
    }
}
