use super::aggregate::EntryTest;
use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::{ApiEnvelope, FilterFacets, ListPage, Pagination};
use crate::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PAGE_SIZE: u32 = 10;

/// Query of `GET /get-tests`. The endpoint has no filters of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestListRequest {
    pub page: u32,
    pub limit: u32,
}

impl TestListRequest {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            limit: PAGE_SIZE,
        }
    }

    pub fn to_query(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestListData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tests: Vec<EntryTest>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// `{ success, data: { tests, pagination } }`
pub type TestListResponse = ApiEnvelope<TestListData>;

/// One fetched page as the merge loop consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct TestPage {
    pub tests: Vec<EntryTest>,
    pub total_pages: u32,
}

impl TestListResponse {
    pub fn into_test_page(self) -> Result<TestPage, ApiError> {
        let data = self.into_data()?;
        Ok(TestPage {
            total_pages: data.pagination.map(|p| p.total_pages).unwrap_or(1).max(1),
            tests: data.tests,
        })
    }
}

impl From<TestPage> for ListPage<EntryTest> {
    fn from(page: TestPage) -> Self {
        ListPage {
            pagination: Pagination {
                total_pages: page.total_pages,
                ..Pagination::empty(PAGE_SIZE)
            },
            items: page.tests,
            facets: FilterFacets::default(),
        }
    }
}

/// Parse `GET /tests/:id`, which answers `{data: {test}}`, `{data: test}`
/// or the bare test object depending on the backend version.
pub fn parse_test_detail(body: Value) -> Result<EntryTest, ApiError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Unsuccessful);
    }
    let candidate = match body.get("data") {
        Some(data) => match data.get("test") {
            Some(test) if test.is_object() => test.clone(),
            _ => data.clone(),
        },
        None => body,
    };
    if !candidate.is_object() || candidate.get("id").map_or(true, Value::is_null) {
        return Err(ApiError::NotFound);
    }
    Ok(serde_json::from_value(candidate)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_query() {
        assert_eq!(TestListRequest::page(3).to_query(), "page=3&limit=10");
    }

    #[test]
    fn test_list_page_total_pages() {
        let resp: TestListResponse = serde_json::from_value(json!({
            "success": true,
            "data": {
                "tests": [{"id": 1, "test_name": "ECAT", "test_type": "Engineering"}],
                "pagination": {"page": 1, "limit": 10, "totalPages": 3, "totalItems": 25}
            }
        }))
        .unwrap();
        let page = resp.into_test_page().unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.tests[0].test_name, "ECAT");

        let list: ListPage<EntryTest> = page.into();
        assert_eq!(list.pagination.total_pages, 3);
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_list_without_pagination_is_one_page() {
        let resp: TestListResponse =
            serde_json::from_value(json!({"success": true, "data": {"tests": []}})).unwrap();
        assert_eq!(resp.into_test_page().unwrap().total_pages, 1);
    }

    #[test]
    fn test_detail_shapes() {
        let nested = json!({"success": true, "data": {"test": {"id": 4, "test_name": "LAT"}}});
        let flat = json!({"data": {"id": 4, "test_name": "LAT"}});
        let bare = json!({"id": 4, "test_name": "LAT"});
        for body in [nested, flat, bare] {
            let test = parse_test_detail(body).unwrap();
            assert_eq!(test.id.as_str(), "4");
            assert_eq!(test.test_name, "LAT");
        }
    }

    #[test]
    fn test_detail_failures() {
        assert_eq!(
            parse_test_detail(json!({"success": false, "message": "nope"})),
            Err(ApiError::Unsuccessful)
        );
        assert_eq!(parse_test_detail(json!({"data": null})), Err(ApiError::NotFound));
        assert_eq!(parse_test_detail(json!({"data": {}})), Err(ApiError::NotFound));
    }
}
