use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::domain::a001_institute::dto::{
    InstituteDetailResponse, InstituteListRequest, InstituteListResponse,
};
use contracts::domain::a001_institute::Institute;
use contracts::domain::common::ListPage;
use contracts::enums::InstituteType;
use contracts::shared::api_error::ApiError;
use contracts::shared::listing::ListingFilter;

/// One page of `/get-institutes`, restricted to `kind`.
pub async fn fetch_page(
    filter: ListingFilter,
    kind: InstituteType,
) -> Result<ListPage<Institute>, ApiError> {
    let request = InstituteListRequest::from_filter(&filter, kind);
    let url = api_url("/get-institutes", &request.to_query());
    let response: InstituteListResponse = get_json(&url).await?;
    response.into_page(&request)
}

pub async fn fetch_by_id(id: &str) -> Result<Institute, ApiError> {
    let url = api_url(&format!("/institutes/{}", urlencoding::encode(id)), "");
    let response: InstituteDetailResponse = get_json(&url).await?;
    response.into_institute()
}
