use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;
use contracts::domain::a004_blog::dto::{BlogDetailResponse, BlogListRequest, BlogListResponse};
use contracts::domain::a004_blog::BlogPost;
use contracts::domain::common::ListPage;
use contracts::shared::api_error::ApiError;
use contracts::shared::listing::ListingFilter;

/// Published posts only.
pub async fn fetch_page(filter: ListingFilter) -> Result<ListPage<BlogPost>, ApiError> {
    let request = BlogListRequest::from_filter(&filter);
    let url = api_url("/blogs", &request.to_query());
    let response: BlogListResponse = get_json(&url).await?;
    response.into_page(&request)
}

pub async fn fetch_by_slug(slug: &str) -> Result<BlogPost, ApiError> {
    let url = api_url(&format!("/blogs/slug/{}", urlencoding::encode(slug)), "");
    let response: BlogDetailResponse = get_json(&url).await?;
    response.into_blog()
}
