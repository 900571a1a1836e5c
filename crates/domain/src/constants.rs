//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Schedule grid limits
pub const MIN_SLOT_NUMBER: u8 = 1;
pub const MAX_SLOT_NUMBER: u8 = 8;

// Upcoming homework window used by dashboards
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

// OAuth scope requested so the backend can mirror homework into the
// user's Google Calendar
pub const GOOGLE_CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

// Default color assigned to classes created without one
pub const DEFAULT_CLASS_COLOR: &str = "#3B82F6";
