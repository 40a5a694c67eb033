use crate::domain::common::serde_helpers::{loose_text, null_as_default};
use crate::domain::common::EntityId;
use crate::enums::InstituteType;
use serde::{Deserialize, Serialize};

/// Ranking line shown on the institute overview tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub rank: Option<String>,
}

/// School, college or university as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institute {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institute_name: String,
    #[serde(default)]
    pub institute_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,

    // Location
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub address: Option<String>,

    // Figures
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u64>,
    #[serde(default)]
    pub students: Option<u64>,
    #[serde(default)]
    pub faculty: Option<u64>,
    #[serde(default)]
    pub campuses: Option<u64>,
    #[serde(default, deserialize_with = "loose_text")]
    pub founded: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    // Presentation
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    // Tabs
    #[serde(default, deserialize_with = "null_as_default")]
    pub programs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rankings: Vec<Ranking>,

    // Contact
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Institute {
    pub fn kind(&self) -> Option<InstituteType> {
        self.institute_type
            .as_deref()
            .and_then(InstituteType::from_label)
    }

    /// "Lahore, Punjab" / "Lahore" / address fallback.
    pub fn location(&self) -> Option<String> {
        match (self.city.as_deref(), self.province.as_deref()) {
            (Some(city), Some(province)) if !province.is_empty() => {
                Some(format!("{city}, {province}"))
            }
            (Some(city), _) => Some(city.to_string()),
            (None, _) => self.address.clone(),
        }
    }

    /// Two-letter badge used when the institute has no image.
    pub fn initials(&self) -> String {
        self.institute_name
            .split_whitespace()
            .filter_map(|w| w.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_payload() {
        let inst: Institute = serde_json::from_value(json!({
            "id": 12,
            "institute_name": "Beaconhouse School System",
            "institute_type": "School",
            "city": "Lahore",
            "programs": null,
            "featured": null
        }))
        .unwrap();
        assert_eq!(inst.id.as_str(), "12");
        assert_eq!(inst.kind(), Some(InstituteType::School));
        assert!(inst.programs.is_empty());
        assert!(!inst.featured);
        assert_eq!(inst.location().as_deref(), Some("Lahore"));
        assert_eq!(inst.initials(), "BS");
    }

    #[test]
    fn test_location_with_province() {
        let inst: Institute = serde_json::from_value(json!({
            "id": "nust",
            "institute_name": "NUST",
            "city": "Islamabad",
            "province": "ICT",
            "founded": 1991,
            "rankings": [{"title": "QS Asia Rankings", "rank": "#72"}, {"title": "HEC", "rank": 1}]
        }))
        .unwrap();
        assert_eq!(inst.location().as_deref(), Some("Islamabad, ICT"));
        assert_eq!(inst.founded.as_deref(), Some("1991"));
        assert_eq!(inst.rankings[1].rank.as_deref(), Some("1"));
    }
}
