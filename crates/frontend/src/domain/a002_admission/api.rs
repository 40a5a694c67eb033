use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::domain::a002_admission::dto::{
    AdmissionDetailResponse, AdmissionListRequest, AdmissionListResponse,
};
use contracts::domain::a002_admission::Admission;
use contracts::domain::common::ListPage;
use contracts::shared::api_error::ApiError;
use contracts::shared::listing::ListingFilter;

pub async fn fetch_page(filter: ListingFilter) -> Result<ListPage<Admission>, ApiError> {
    let request = AdmissionListRequest::from_filter(&filter);
    let url = api_url("/admissions", &request.to_query());
    let response: AdmissionListResponse = get_json(&url).await?;
    response.into_page(&request)
}

pub async fn fetch_by_id(id: &str) -> Result<Admission, ApiError> {
    let url = api_url(&format!("/admissions/{}", urlencoding::encode(id)), "");
    let response: AdmissionDetailResponse = get_json(&url).await?;
    response.into_admission()
}
