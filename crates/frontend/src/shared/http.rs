use contracts::shared::api_error::ApiError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// `GET url` and decode the JSON body.
///
/// Transport failures, non-2xx statuses and undecodable bodies all come back
/// as `ApiError`; 404 becomes `ApiError::NotFound`.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {url}");

    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
