use super::aggregate::Admission;
use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::{ApiEnvelope, FilterFacets, ListPage, Pagination};
use crate::shared::api_error::ApiError;
use crate::shared::listing::ListingFilter;
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: u32 = 7;

/// Query of `GET /admissions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionListRequest {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AdmissionListRequest {
    pub fn from_filter(filter: &ListingFilter) -> Self {
        Self {
            page: filter.page,
            limit: PAGE_SIZE,
            search: filter.search_term().map(str::to_string),
            city: filter.city.clone(),
            field: filter.field.clone(),
        }
    }

    pub fn to_query(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// `{ admissions, pagination, filters: { cities, fields } }`
///
/// Unlike the other list endpoints this one is not wrapped in `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionListResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admissions: Vec<Admission>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub filters: Option<FilterFacets>,
}

impl AdmissionListResponse {
    pub fn into_page(self, request: &AdmissionListRequest) -> Result<ListPage<Admission>, ApiError> {
        if self.success == Some(false) {
            return Err(ApiError::Unsuccessful);
        }
        Ok(ListPage {
            pagination: ListPage::<Admission>::resolve_pagination(
                self.pagination,
                request.page,
                request.limit,
            ),
            facets: self.filters.unwrap_or_default(),
            items: self.admissions,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionDetailData {
    #[serde(default)]
    pub admission: Option<Admission>,
}

/// `{ success, data: { admission } }`
pub type AdmissionDetailResponse = ApiEnvelope<AdmissionDetailData>;

impl AdmissionDetailResponse {
    pub fn into_admission(self) -> Result<Admission, ApiError> {
        self.into_data()?.admission.ok_or(ApiError::NotFound)
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
            FilterAction::SetFacet(FacetKey::Field, "Medical".into()),
        );
        let filter = reduce(&filter, FilterAction::SetSearch("mbbs".into()));
        assert_eq!(
            AdmissionListRequest::from_filter(&filter).to_query(),
            "page=1&limit=7&search=mbbs&field=Medical"
        );
    }

    #[test]
    fn test_top_level_list_shape() {
        let resp: AdmissionListResponse = serde_json::from_value(json!({
            "admissions": [
                {"id": 1, "institute": "KEMU", "program": "MBBS", "status": "Open"}
            ],
            "pagination": {"page": 2, "limit": 7, "totalPages": 5, "totalItems": 31},
            "filters": {"cities": ["Lahore"], "fields": ["Medical", "Engineering"]}
        }))
        .unwrap();
        let req = AdmissionListRequest {
            page: 2,
            limit: PAGE_SIZE,
            search: None,
            city: None,
            field: None,
        };
        let page = resp.into_page(&req).unwrap();
        assert_eq!(page.items[0].program, "MBBS");
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.total_pages, 5);
        assert_eq!(page.facets.fields, vec!["Medical", "Engineering"]);
    }

    #[test]
    fn test_detail_envelope() {
        let resp: AdmissionDetailResponse = serde_json::from_value(json!({
            "success": true,
            "data": {"admission": {"id": 9, "institute": "UET", "program": "BSc Civil"}}
        }))
        .unwrap();
        assert_eq!(resp.into_admission().unwrap().institute, "UET");
    }
}
