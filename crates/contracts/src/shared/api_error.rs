use thiserror::Error;

/// Failures of a backend call.
///
/// List pages collapse all of them into an empty result; detail pages render
/// `NotFound` and everything else as a generic "could not load" message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Backend reported an unsuccessful response")]
    Unsuccessful,

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            ApiError::NotFound
        } else {
            ApiError::Http(status)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500), ApiError::Http(500));
        assert!(ApiError::from_status(404).is_not_found());
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }
}
