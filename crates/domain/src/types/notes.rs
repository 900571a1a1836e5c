//! Note types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classes::ClassType;

/// Education level tag attached to public notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    Primary,
    Secondary,
    HighSchool,
    University,
}

impl EducationLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 4] =
        [Self::Primary, Self::Secondary, Self::HighSchool, Self::University];
}

/// A study note, optionally shared publicly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub class_type: Option<ClassType>,
    pub is_public: bool,
    pub education_level: Option<EducationLevel>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
}

/// Partial update for a note
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
}

/// Listing filter for notes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
}
