use thiserror::Error;

/// Failures a query can surface to the caller.
///
/// Cache-layer failures never appear here: an unreadable or absent local
/// store degrades to the network path, so the only transport-visible
/// failure mode is a network or format error combined with an empty cache.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    Format(#[from] serde_json::Error),

    #[error("restaurant {0} does not exist")]
    NotFound(u32),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = FetchError::NotFound(999);
        assert_eq!(err.to_string(), "restaurant 999 does not exist");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_format_error_from_bad_json() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err = FetchError::from(parse_err);
        assert!(matches!(err, FetchError::Format(_)));
        assert!(!err.is_not_found());
    }
}
