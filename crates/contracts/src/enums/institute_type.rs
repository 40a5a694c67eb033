use serde::{Deserialize, Serialize};

/// Institute category; each one has its own listing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstituteType {
    School,
    College,
    University,
}

impl InstituteType {
    /// Value of the `institute_type` query parameter.
    pub fn api_value(&self) -> &'static str {
        match self {
            InstituteType::School => "School",
            InstituteType::College => "College",
            InstituteType::University => "University",
        }
    }

    /// First path segment of the listing and detail routes.
    pub fn route_slug(&self) -> &'static str {
        match self {
            InstituteType::School => "schools",
            InstituteType::College => "colleges",
            InstituteType::University => "universities",
        }
    }

    pub fn plural_name(&self) -> &'static str {
        match self {
            InstituteType::School => "Schools",
            InstituteType::College => "Colleges",
            InstituteType::University => "Universities",
        }
    }

    pub fn list_title(&self) -> &'static str {
        match self {
            InstituteType::School => "Schools in Pakistan",
            InstituteType::College => "Colleges in Pakistan",
            InstituteType::University => "Universities in Pakistan",
        }
    }

    pub fn list_subtitle(&self) -> &'static str {
        match self {
            InstituteType::School => {
                "Explore quality schools for primary and secondary education"
            }
            InstituteType::College => "Find the best colleges for intermediate and higher education",
            InstituteType::University => {
                "Discover top universities offering undergraduate and graduate programs"
            }
        }
    }

    pub fn all() -> Vec<InstituteType> {
        vec![
            InstituteType::School,
            InstituteType::College,
            InstituteType::University,
        ]
    }

    /// Parse either the API value ("University") or the route slug
    /// ("universities"), case-insensitively. Free-form backend labels such as
    /// "Engineering University" resolve by their last word.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all().into_iter().find(|t| {
            label.eq_ignore_ascii_case(t.api_value()) || label.eq_ignore_ascii_case(t.route_slug())
        }).or_else(|| {
            let last = label.rsplit(' ').next()?;
            Self::all()
                .into_iter()
                .find(|t| last.eq_ignore_ascii_case(t.api_value()))
        })
    }
}

impl std::fmt::Display for InstituteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(InstituteType::from_label("School"), Some(InstituteType::School));
        assert_eq!(InstituteType::from_label("colleges"), Some(InstituteType::College));
        assert_eq!(
            InstituteType::from_label("Engineering University"),
            Some(InstituteType::University)
        );
        assert_eq!(InstituteType::from_label("Academy"), None);
    }

    #[test]
    fn test_route_slugs() {
        let slugs: Vec<_> = InstituteType::all().iter().map(|t| t.route_slug()).collect();
        assert_eq!(slugs, vec!["schools", "colleges", "universities"]);
    }
}
