//! Class (course) types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Predefined subject categories offered by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassType {
    Maths,
    English,
    Science,
    History,
    Geography,
    Art,
    Music,
    PhysicalEducation,
    ComputerScience,
    ForeignLanguage,
    Literature,
    Chemistry,
    Physics,
    Biology,
    Other,
}

impl ClassType {
    /// All subject categories in display order
    pub const ALL: [Self; 15] = [
        Self::Maths,
        Self::English,
        Self::Science,
        Self::History,
        Self::Geography,
        Self::Art,
        Self::Music,
        Self::PhysicalEducation,
        Self::ComputerScience,
        Self::ForeignLanguage,
        Self::Literature,
        Self::Chemistry,
        Self::Physics,
        Self::Biology,
        Self::Other,
    ];
}

/// A class the student is enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub teacher: String,
    pub year: String,
    /// Half-group marker for classes split in two (e.g. "A"/"B")
    pub half_group: Option<String>,
    /// Display color, `#RRGGBB`
    pub color: String,
    pub class_type: ClassType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClass {
    pub name: String,
    pub teacher: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub class_type: ClassType,
}

/// Partial update for a class; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_type_uses_screaming_snake_case_on_the_wire() {
        let json = serde_json::to_string(&ClassType::PhysicalEducation).expect("serialize");
        assert_eq!(json, "\"PHYSICAL_EDUCATION\"");

        let parsed: ClassType = serde_json::from_str("\"COMPUTER_SCIENCE\"").expect("deserialize");
        assert_eq!(parsed, ClassType::ComputerScience);
    }

    #[test]
    fn class_update_omits_absent_fields() {
        let update = ClassUpdate { teacher: Some("Ms. Reed".to_string()), ..Default::default() };
        let json = serde_json::to_value(&update).expect("serialize");
        assert_eq!(json, serde_json::json!({ "teacher": "Ms. Reed" }));
    }
}
