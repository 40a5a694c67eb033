use crate::domain::common::serde_helpers::{loose_text, null_as_default};
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Admission window state as the backend labels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionStatus {
    Open,
    ClosingSoon,
    Closed,
}

impl AdmissionStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "closing soon" => Some(Self::ClosingSoon),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::ClosingSoon => "Closing Soon",
            Self::Closed => "Closed",
        }
    }

    /// Only "Closing Soon" gets the warning badge.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::ClosingSoon)
    }
}

/// One program intake of an institute.
///
/// Most fields arrive as free text (`fee` may be `"PKR 150,000"` or a bare
/// number), so they are kept as display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institute: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub program: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub duration: Option<String>,
    #[serde(default)]
    pub intake: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub fee: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub totalfee: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub seats: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub eligibility: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admissionprocess: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub programdetails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub careeropportunities: Vec<String>,

    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Admission {
    pub fn status_kind(&self) -> Option<AdmissionStatus> {
        self.status.as_deref().and_then(AdmissionStatus::from_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_labels() {
        assert_eq!(AdmissionStatus::from_label("Closing Soon"), Some(AdmissionStatus::ClosingSoon));
        assert_eq!(AdmissionStatus::from_label(" open "), Some(AdmissionStatus::Open));
        assert_eq!(AdmissionStatus::from_label("pending"), None);
        assert!(AdmissionStatus::ClosingSoon.is_urgent());
        assert!(!AdmissionStatus::Open.is_urgent());
    }

    #[test]
    fn test_numeric_fee_and_missing_lists() {
        let adm: Admission = serde_json::from_value(json!({
            "id": "a-17",
            "institute": "FAST NUCES",
            "program": "BS Computer Science",
            "field": "Engineering",
            "fee": 185000,
            "seats": "120",
            "status": "Closing Soon",
            "eligibility": null
        }))
        .unwrap();
        assert_eq!(adm.fee.as_deref(), Some("185000"));
        assert_eq!(adm.seats.as_deref(), Some("120"));
        assert!(adm.eligibility.is_empty());
        assert!(adm.careeropportunities.is_empty());
        assert_eq!(adm.status_kind(), Some(AdmissionStatus::ClosingSoon));
    }
}
