use crate::domain::a001_institute::ui::details::InstituteDetail;
use crate::domain::a001_institute::ui::list::InstituteList;
use crate::domain::a002_admission::ui::details::AdmissionDetail;
use crate::domain::a002_admission::ui::list::AdmissionList;
use crate::domain::a003_test::ui::details::TestDetail;
use crate::domain::a003_test::ui::list::TestList;
use crate::domain::a004_blog::ui::details::BlogDetail;
use crate::domain::a004_blog::ui::list::BlogList;
use crate::layout::global_context::use_app_context;
use crate::pages::compare::ComparePage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use contracts::enums::InstituteType;
use leptos::prelude::*;

/// Every page reachable by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    InstituteList(InstituteType),
    /// `/{type}/{slugified-name}-{id}`; the raw segment is kept
    InstituteDetail(InstituteType, String),
    AdmissionList,
    AdmissionDetail(String),
    TestList,
    TestDetail(String),
    BlogList,
    BlogDetail(String),
    Compare,
    Contact,
    NotFound,
}

impl AppRoute {
    /// Match a pathname (query and fragment are ignored).
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["admissions"] => Self::AdmissionList,
            ["admissions", id] => Self::AdmissionDetail(id.to_string()),
            ["tests"] => Self::TestList,
            ["tests", id] => Self::TestDetail(id.to_string()),
            ["blog"] => Self::BlogList,
            ["blog", slug] => Self::BlogDetail(slug.to_string()),
            ["compare"] => Self::Compare,
            ["contact"] => Self::Contact,
            [kind] => match slug_kind(kind) {
                Some(kind) => Self::InstituteList(kind),
                None => Self::NotFound,
            },
            [kind, segment] => match slug_kind(kind) {
                Some(kind) => Self::InstituteDetail(kind, segment.to_string()),
                None => Self::NotFound,
            },
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::InstituteList(kind) => format!("/{}", kind.route_slug()),
            Self::InstituteDetail(kind, segment) => format!("/{}/{}", kind.route_slug(), segment),
            Self::AdmissionList => "/admissions".to_string(),
            Self::AdmissionDetail(id) => format!("/admissions/{id}"),
            Self::TestList => "/tests".to_string(),
            Self::TestDetail(id) => format!("/tests/{id}"),
            Self::BlogList => "/blog".to_string(),
            Self::BlogDetail(slug) => format!("/blog/{slug}"),
            Self::Compare => "/compare".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Navbar entry to highlight; detail pages light up their listing.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::InstituteList(kind) | Self::InstituteDetail(kind, _) => {
                Some(match kind {
                    InstituteType::School => "/schools",
                    InstituteType::College => "/colleges",
                    InstituteType::University => "/universities",
                })
            }
            Self::AdmissionList | Self::AdmissionDetail(_) => Some("/admissions"),
            Self::TestList | Self::TestDetail(_) => Some("/tests"),
            Self::BlogList | Self::BlogDetail(_) => Some("/blog"),
            Self::Compare => Some("/compare"),
            Self::Contact => Some("/contact"),
            Self::NotFound => None,
        }
    }
}

fn slug_kind(segment: &str) -> Option<InstituteType> {
    InstituteType::all()
        .into_iter()
        .find(|kind| kind.route_slug() == segment)
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let route = use_app_context().route();

    move || match route.get() {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::InstituteList(kind) => view! { <InstituteList kind=kind /> }.into_any(),
        AppRoute::InstituteDetail(kind, segment) => {
            view! { <InstituteDetail kind=kind segment=segment /> }.into_any()
        }
        AppRoute::AdmissionList => view! { <AdmissionList /> }.into_any(),
        AppRoute::AdmissionDetail(id) => view! { <AdmissionDetail id=id /> }.into_any(),
        AppRoute::TestList => view! { <TestList /> }.into_any(),
        AppRoute::TestDetail(id) => view! { <TestDetail id=id /> }.into_any(),
        AppRoute::BlogList => view! { <BlogList /> }.into_any(),
        AppRoute::BlogDetail(slug) => view! { <BlogDetail slug=slug /> }.into_any(),
        AppRoute::Compare => view! { <ComparePage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(AppRoute::parse("/"), AppRoute::Home);
        assert_eq!(AppRoute::parse(""), AppRoute::Home);
        assert_eq!(AppRoute::parse("/admissions"), AppRoute::AdmissionList);
        assert_eq!(AppRoute::parse("/tests/"), AppRoute::TestList);
        assert_eq!(AppRoute::parse("/blog?search=mdcat"), AppRoute::BlogList);
        assert_eq!(AppRoute::parse("/compare"), AppRoute::Compare);
        assert_eq!(AppRoute::parse("/contact"), AppRoute::Contact);
    }

    #[test]
    fn test_institute_routes() {
        assert_eq!(
            AppRoute::parse("/colleges"),
            AppRoute::InstituteList(InstituteType::College)
        );
        assert_eq!(
            AppRoute::parse("/universities/lahore-university-of-management-sciences-7"),
            AppRoute::InstituteDetail(
                InstituteType::University,
                "lahore-university-of-management-sciences-7".into()
            )
        );
    }

    #[test]
    fn test_detail_routes() {
        assert_eq!(AppRoute::parse("/admissions/12"), AppRoute::AdmissionDetail("12".into()));
        assert_eq!(AppRoute::parse("/tests/4"), AppRoute::TestDetail("4".into()));
        assert_eq!(
            AppRoute::parse("/blog/mdcat-preparation-guide"),
            AppRoute::BlogDetail("mdcat-preparation-guide".into())
        );
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(AppRoute::parse("/admin-dashboard"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("/schools/a/b"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("/hospitals/3"), AppRoute::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for path in ["/", "/schools", "/admissions/3", "/tests", "/blog/x", "/compare"] {
            assert_eq!(AppRoute::parse(path).path(), path);
        }
        assert_eq!(
            AppRoute::TestDetail("9".into()).section(),
            Some("/tests")
        );
    }
}
