//! Weekly schedule types
//!
//! A schedule is a named set of time slots keyed by weekday and slot number.
//! At most one schedule is active per school year.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// School weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl WeekDay {
    /// All school days in display order
    pub const ALL: [Self; 5] =
        [Self::Monday, Self::Tuesday, Self::Wednesday, Self::Thursday, Self::Friday];
}

/// What a schedule slot is used for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotType {
    #[default]
    Class,
    Reading,
    Recess,
}

/// A named weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub name: String,
    pub year: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One time slot inside a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub id: String,
    pub schedule_id: String,
    pub day: WeekDay,
    /// Position within the day, 1-based
    pub slot_number: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_type: SlotType,
    pub class_id: Option<String>,
}

/// Schedule with its slots expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWithSlots {
    #[serde(flatten)]
    pub schedule: Schedule,
    #[serde(default)]
    pub slots: Vec<ScheduleSlot>,
}

/// Payload for creating a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchedule {
    pub name: String,
    pub year: String,
}

/// Payload for creating a slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewScheduleSlot {
    pub day: WeekDay,
    pub slot_number: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub slot_type: SlotType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
}

/// Partial update for a slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSlotUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<SlotType>,
}

/// Slots bucketed per weekday, ordered by slot number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: Vec<ScheduleSlot>,
    pub tuesday: Vec<ScheduleSlot>,
    pub wednesday: Vec<ScheduleSlot>,
    pub thursday: Vec<ScheduleSlot>,
    pub friday: Vec<ScheduleSlot>,
}

impl WeeklySchedule {
    /// Slots for the given day
    #[must_use]
    pub fn day(&self, day: WeekDay) -> &[ScheduleSlot] {
        match day {
            WeekDay::Monday => &self.monday,
            WeekDay::Tuesday => &self.tuesday,
            WeekDay::Wednesday => &self.wednesday,
            WeekDay::Thursday => &self.thursday,
            WeekDay::Friday => &self.friday,
        }
    }

    pub(crate) fn day_mut(&mut self, day: WeekDay) -> &mut Vec<ScheduleSlot> {
        match day {
            WeekDay::Monday => &mut self.monday,
            WeekDay::Tuesday => &mut self.tuesday,
            WeekDay::Wednesday => &mut self.wednesday,
            WeekDay::Thursday => &mut self.thursday,
            WeekDay::Friday => &mut self.friday,
        }
    }
}
