use super::aggregate::BlogPost;
use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::{ApiEnvelope, ListPage, Pagination};
use crate::shared::api_error::ApiError;
use crate::shared::listing::ListingFilter;
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: u32 = 9;
pub const PUBLISHED: &str = "published";

/// Query of `GET /blogs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogListRequest {
    pub page: u32,
    pub limit: u32,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl BlogListRequest {
    pub fn from_filter(filter: &ListingFilter) -> Self {
        Self {
            page: filter.page,
            limit: PAGE_SIZE,
            status: PUBLISHED.to_string(),
            search: filter.search_term().map(str::to_string),
        }
    }

    pub fn to_query(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogListData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub blogs: Vec<BlogPost>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// `{ success, data: { blogs, pagination } }`
pub type BlogListResponse = ApiEnvelope<BlogListData>;

impl BlogListResponse {
    pub fn into_page(self, request: &BlogListRequest) -> Result<ListPage<BlogPost>, ApiError> {
        let data = self.into_data()?;
        Ok(ListPage {
            pagination: ListPage::<BlogPost>::resolve_pagination(
                data.pagination,
                request.page,
                request.limit,
            ),
            facets: Default::default(),
            items: data.blogs,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogDetailData {
    #[serde(default)]
    pub blog: Option<BlogPost>,
}

/// `{ success, data: { blog } }`
pub type BlogDetailResponse = ApiEnvelope<BlogDetailData>;

impl BlogDetailResponse {
    pub fn into_blog(self) -> Result<BlogPost, ApiError> {
        self.into_data()?.blog.ok_or(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{reduce, FilterAction};
    use serde_json::json;

    #[test]
    fn test_request_always_published() {
        let req = BlogListRequest::from_filter(&ListingFilter::default());
        assert_eq!(req.to_query(), "page=1&limit=9&status=published");

        let filter = reduce(&ListingFilter::default(), FilterAction::SetSearch("ecat tips".into()));
        let req = BlogListRequest::from_filter(&filter);
        assert_eq!(req.search.as_deref(), Some("ecat tips"));
        assert!(req.to_query().starts_with("page=1&limit=9&status=published&search=ecat"));
    }

    #[test]
    fn test_list_envelope() {
        let resp: BlogListResponse = serde_json::from_value(json!({
            "success": true,
            "data": {
                "blogs": [{"id": 1, "slug": "a", "title": "A"}, {"id": 2, "slug": "b", "title": "B"}],
                "pagination": {"page": 1, "limit": 9, "totalPages": 2, "total": 11}
            }
        }))
        .unwrap();
        let page = resp
            .into_page(&BlogListRequest::from_filter(&ListingFilter::default()))
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total_items, 11);
        assert!(page.facets.cities.is_empty());
    }

    #[test]
    fn test_detail_envelope() {
        let resp: BlogDetailResponse = serde_json::from_value(json!({
            "success": true,
            "data": {"blog": {"id": 1, "slug": "ecat", "title": "ECAT", "content": "<p>hi</p>"}}
        }))
        .unwrap();
        assert_eq!(resp.into_blog().unwrap().slug, "ecat");

        let gone: BlogDetailResponse =
            serde_json::from_value(json!({"success": false})).unwrap();
        assert_eq!(gone.into_blog(), Err(ApiError::Unsuccessful));
    }
}
