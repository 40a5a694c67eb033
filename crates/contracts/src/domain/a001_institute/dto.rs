use super::aggregate::Institute;
use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::{ApiEnvelope, FilterFacets, ListPage, Pagination};
use crate::enums::InstituteType;
use crate::shared::api_error::ApiError;
use crate::shared::listing::ListingFilter;
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: u32 = 10;

/// Query of `GET /get-institutes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstituteListRequest {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub institute_type: String,
}

impl InstituteListRequest {
    pub fn from_filter(filter: &ListingFilter, kind: InstituteType) -> Self {
        Self {
            page: filter.page,
            limit: PAGE_SIZE,
            search: filter.search_term().map(str::to_string),
            city: filter.city.clone(),
            institute_type: kind.api_value().to_string(),
        }
    }

    pub fn to_query(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstituteListData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub institutes: Vec<Institute>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub filters: Option<FilterFacets>,
}

/// `{ success, data: { institutes, pagination, filters: { cities } } }`
pub type InstituteListResponse = ApiEnvelope<InstituteListData>;

impl InstituteListResponse {
    pub fn into_page(self, request: &InstituteListRequest) -> Result<ListPage<Institute>, ApiError> {
        let data = self.into_data()?;
        Ok(ListPage {
            pagination: ListPage::<Institute>::resolve_pagination(
                data.pagination,
                request.page,
                request.limit,
            ),
            facets: data.filters.unwrap_or_default(),
            items: data.institutes,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstituteDetailData {
    #[serde(default)]
    pub institute: Option<Institute>,
}

/// `{ success, data: { institute } }`
pub type InstituteDetailResponse = ApiEnvelope<InstituteDetailData>;

impl InstituteDetailResponse {
    pub fn into_institute(self) -> Result<Institute, ApiError> {
        self.into_data()?.institute.ok_or(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{reduce, FacetKey, FilterAction};
    use serde_json::json;

    #[test]
    fn test_request_query() {
        let filter = reduce(
            &ListingFilter::default(),
            FilterAction::SetFacet(FacetKey::City, "Lahore".into()),
        );
        let filter = reduce(&filter, FilterAction::GoToPage(2));
        let req = InstituteListRequest::from_filter(&filter, InstituteType::School);
        assert_eq!(req.to_query(), "page=2&limit=10&city=Lahore&institute_type=School");
    }

    #[test]
    fn test_list_envelope() {
        let resp: InstituteListResponse = serde_json::from_value(json!({
            "success": true,
            "data": {
                "institutes": [
                    {"id": 1, "institute_name": "NUST", "institute_type": "University", "city": "Islamabad"},
                    {"id": 2, "institute_name": "LUMS", "institute_type": "University", "city": "Lahore"}
                ],
                "pagination": {"page": 1, "limit": 10, "totalPages": 4, "totalItems": 37},
                "filters": {"cities": ["Islamabad", "Lahore"]}
            }
        }))
        .unwrap();
        let req = InstituteListRequest::from_filter(&ListingFilter::default(), InstituteType::University);
        let page = resp.into_page(&req).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total_pages, 4);
        assert_eq!(page.pagination.total_items, 37);
        assert_eq!(page.facets.cities, vec!["Islamabad", "Lahore"]);
    }

    #[test]
    fn test_unsuccessful_list() {
        let resp: InstituteListResponse =
            serde_json::from_value(json!({"success": false, "message": "db down"})).unwrap();
        let req = InstituteListRequest::from_filter(&ListingFilter::default(), InstituteType::College);
        assert_eq!(resp.into_page(&req), Err(ApiError::Unsuccessful));
    }

    #[test]
    fn test_detail_envelope() {
        let resp: InstituteDetailResponse = serde_json::from_value(json!({
            "success": true,
            "data": {"institute": {"id": 5, "institute_name": "Aitchison College"}}
        }))
        .unwrap();
        assert_eq!(resp.into_institute().unwrap().institute_name, "Aitchison College");

        let missing: InstituteDetailResponse =
            serde_json::from_value(json!({"success": true, "data": {}})).unwrap();
        assert_eq!(missing.into_institute(), Err(ApiError::NotFound));
    }
}
