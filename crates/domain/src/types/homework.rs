//! Homework types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Homework priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Homework completion status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HomeworkStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A homework item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub class_id: String,
    pub title: String,
    pub description: Option<String>,
    pub assigned_date: NaiveDate,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub priority: Priority,
    pub status: HomeworkStatus,
    /// Set once the backend has mirrored the item into Google Calendar
    pub google_calendar_event_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Payload for creating a homework item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHomework {
    pub class_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub priority: Priority,
}

/// Partial update for a homework item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeworkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HomeworkStatus>,
}

/// Listing filter forwarded as query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeworkQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HomeworkStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_backend_spelling() {
        let json = serde_json::to_string(&HomeworkStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"IN_PROGRESS\"");
    }

    #[test]
    fn empty_query_serializes_to_no_parameters() {
        let query = HomeworkQuery::default();
        let value = serde_json::to_value(&query).expect("serialize");
        assert_eq!(value, serde_json::json!({}));
    }
}
