use crate::domain::common::serde_helpers::{loose_text, null_as_default};
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Label of the synthetic category chip that shows every test.
pub const ALL_TESTS: &str = "All Tests";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub marks: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub questions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportantDate {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusItem {
    #[serde(default)]
    pub syllabus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityItem {
    #[serde(default)]
    pub eligibility: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationItem {
    #[serde(default)]
    pub preparation: Option<String>,
}

/// Entry / admission test (MDCAT, ECAT, LAT, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryTest {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_name: String,
    #[serde(default)]
    pub test_full_name: Option<String>,
    #[serde(default)]
    pub test_type: Option<String>,
    #[serde(default)]
    pub test_date: Option<String>,
    #[serde(default)]
    pub registration_deadline: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub total_marks: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub passing_marks: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub registration_fee: Option<String>,
    #[serde(default)]
    pub official_website: Option<String>,
    #[serde(default)]
    pub test_overview: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub test_structure: Vec<StructureSection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_syllabus: Vec<SyllabusItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_eligibility: Vec<EligibilityItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_preparation: Vec<PreparationItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_important_dates: Vec<ImportantDate>,
}

impl EntryTest {
    /// Category used by the tests page chips. Blank types are uncategorised.
    pub fn category(&self) -> Option<&str> {
        self.test_type.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn discipline(&self) -> TestDiscipline {
        TestDiscipline::from_test_type(self.test_type.as_deref().unwrap_or_default())
    }

    pub fn syllabus(&self) -> Vec<&str> {
        self.test_syllabus
            .iter()
            .filter_map(|x| x.syllabus.as_deref())
            .collect()
    }

    pub fn eligibility(&self) -> Vec<&str> {
        self.test_eligibility
            .iter()
            .filter_map(|x| x.eligibility.as_deref())
            .collect()
    }

    pub fn preparation(&self) -> Vec<&str> {
        self.test_preparation
            .iter()
            .filter_map(|x| x.preparation.as_deref())
            .collect()
    }
}

/// Coarse grouping of a test type, used to pick the header icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDiscipline {
    Law,
    Medical,
    Engineering,
    General,
}

impl TestDiscipline {
    pub fn from_test_type(test_type: &str) -> Self {
        let t = test_type.to_lowercase();
        if t.contains("law") {
            Self::Law
        } else if t.contains("medical") {
            Self::Medical
        } else if t.contains("engineering") {
            Self::Engineering
        } else {
            Self::General
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Law => "award",
            Self::Medical | Self::General => "book-open",
            Self::Engineering => "file-text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discipline_from_type() {
        assert_eq!(TestDiscipline::from_test_type("Law Admission"), TestDiscipline::Law);
        assert_eq!(TestDiscipline::from_test_type("MEDICAL"), TestDiscipline::Medical);
        assert_eq!(TestDiscipline::from_test_type("Engineering"), TestDiscipline::Engineering);
        assert_eq!(TestDiscipline::from_test_type("Graduate"), TestDiscipline::General);
        assert_eq!(TestDiscipline::Engineering.icon_name(), "file-text");
        assert_eq!(TestDiscipline::General.icon_name(), "book-open");
    }

    #[test]
    fn test_sub_lists() {
        let test: EntryTest = serde_json::from_value(json!({
            "id": 3,
            "test_name": "MDCAT",
            "test_type": "Medical",
            "total_marks": 200,
            "test_structure": [{"name": "Biology", "marks": 68, "questions": "68"}],
            "test_syllabus": [{"syllabus": "Cell biology"}, {"syllabus": null}],
            "test_eligibility": null
        }))
        .unwrap();
        assert_eq!(test.total_marks.as_deref(), Some("200"));
        assert_eq!(test.test_structure[0].marks.as_deref(), Some("68"));
        assert_eq!(test.syllabus(), vec!["Cell biology"]);
        assert!(test.eligibility().is_empty());
        assert_eq!(test.category(), Some("Medical"));
    }

    #[test]
    fn test_blank_type_is_uncategorised() {
        let test: EntryTest =
            serde_json::from_value(json!({"id": "x", "test_name": "GAT", "test_type": " "})).unwrap();
        assert_eq!(test.category(), None);
        assert_eq!(test.discipline(), TestDiscipline::General);
    }
}
