use crate::shared::api_error::ApiError;
use serde::Deserialize;

/// The outer `{ success, data }` wrapper used by most endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload; `success: false` and a missing `data` are errors.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Unsuccessful);
        }
        self.data.ok_or(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn test_success_with_data() {
        let env: ApiEnvelope<Payload> =
            serde_json::from_value(json!({"success": true, "data": {"value": 3}})).unwrap();
        assert_eq!(env.into_data(), Ok(Payload { value: 3 }));
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let env: ApiEnvelope<Payload> =
            serde_json::from_value(json!({"success": false, "message": "boom"})).unwrap();
        assert_eq!(env.into_data(), Err(ApiError::Unsuccessful));
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let env: ApiEnvelope<Payload> =
            serde_json::from_value(json!({"data": {"value": 1}})).unwrap();
        assert_eq!(env.into_data(), Err(ApiError::Unsuccessful));
    }

    #[test]
    fn test_null_data_is_not_found() {
        let env: ApiEnvelope<Payload> =
            serde_json::from_value(json!({"success": true, "data": null})).unwrap();
        assert_eq!(env.into_data(), Err(ApiError::NotFound));
    }
}
