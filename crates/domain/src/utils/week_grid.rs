//! Weekly schedule grid builder
//!
//! Turns the flat slot list returned by the backend into the per-weekday
//! grid the schedule view renders. Slots are keyed by (day, slot number);
//! when the input contains two slots for the same key, the later one wins.

use crate::constants::{MAX_SLOT_NUMBER, MIN_SLOT_NUMBER};
use crate::types::schedule::{ScheduleSlot, WeekDay, WeeklySchedule};

/// Build the weekly grid from a flat slot list.
///
/// Slots with a slot number outside the schedulable range are dropped.
/// Within a day, slots are ordered by slot number.
#[must_use]
pub fn build_weekly_schedule(slots: Vec<ScheduleSlot>) -> WeeklySchedule {
    let mut grid = WeeklySchedule::default();

    for slot in slots {
        if slot.slot_number < MIN_SLOT_NUMBER || slot.slot_number > MAX_SLOT_NUMBER {
            continue;
        }

        let day = grid.day_mut(slot.day);
        if let Some(existing) = day.iter_mut().find(|s| s.slot_number == slot.slot_number) {
            // Later write wins for a duplicate (day, slot number) key
            *existing = slot;
        } else {
            day.push(slot);
        }
    }

    for day in WeekDay::ALL {
        grid.day_mut(day).sort_by_key(|slot| slot.slot_number);
    }

    grid
}
