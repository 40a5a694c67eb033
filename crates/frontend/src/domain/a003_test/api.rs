use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::domain::a003_test::dto::{parse_test_detail, TestListRequest, TestListResponse};
use contracts::domain::a003_test::EntryTest;
use contracts::domain::common::ListPage;
use contracts::shared::api_error::ApiError;
use contracts::shared::listing::merge_all;

pub async fn fetch_page(page: u32) -> Result<ListPage<EntryTest>, ApiError> {
    let request = TestListRequest::page(page);
    let url = api_url("/get-tests", &request.to_query());
    let response: TestListResponse = get_json(&url).await?;
    Ok(response.into_test_page()?.into())
}

/// Every test the backend has, fetched page by page in order.
pub async fn fetch_all() -> Result<Vec<EntryTest>, ApiError> {
    merge_all(fetch_page).await
}

pub async fn fetch_by_id(id: &str) -> Result<EntryTest, ApiError> {
    let url = api_url(&format!("/tests/{}", urlencoding::encode(id)), "");
    let body: serde_json::Value = get_json(&url).await?;
    parse_test_detail(body)
}
