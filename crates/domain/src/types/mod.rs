//! Domain types and models

pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod homework;
pub mod notes;
pub mod schedule;

pub use auth::{
    AuthPhase, AuthState, ProfileUpdate, ProviderTokens, Session, SessionExchange, SessionUser,
    User, UserMetadata,
};
pub use classes::{Class, ClassType, ClassUpdate, NewClass};
pub use dashboard::DashboardSummary;
pub use homework::{Homework, HomeworkQuery, HomeworkStatus, HomeworkUpdate, NewHomework, Priority};
pub use notes::{EducationLevel, NewNote, Note, NoteQuery, NoteUpdate};
pub use schedule::{
    NewSchedule, NewScheduleSlot, Schedule, ScheduleSlot, ScheduleSlotUpdate, ScheduleWithSlots,
    SlotType, WeekDay, WeeklySchedule,
};
