//! Schedule commands

use std::sync::Arc;

use studyhall_domain::{
    NewSchedule, NewScheduleSlot, Result, Schedule, ScheduleSlot, ScheduleSlotUpdate,
    ScheduleWithSlots, WeeklySchedule,
};

use super::execute;
use crate::context::AppContext;

pub async fn list_schedules(ctx: &Arc<AppContext>) -> Result<Vec<Schedule>> {
    execute("schedules::list", ctx.schedules.list()).await
}

pub async fn get_schedule(ctx: &Arc<AppContext>, id: &str) -> Result<ScheduleWithSlots> {
    execute("schedules::get", ctx.schedules.get(id)).await
}

pub async fn schedule_slots(ctx: &Arc<AppContext>, id: &str) -> Result<Vec<ScheduleSlot>> {
    execute("schedules::slots", ctx.schedules.slots(id)).await
}

pub async fn active_schedule(ctx: &Arc<AppContext>) -> Result<Option<ScheduleWithSlots>> {
    execute("schedules::active", ctx.schedules.active()).await
}

/// The active schedule as the per-weekday grid the schedule view renders
pub async fn active_week(ctx: &Arc<AppContext>) -> Result<Option<WeeklySchedule>> {
    execute("schedules::active_week", ctx.schedules.active_week()).await
}

pub async fn create_schedule(ctx: &Arc<AppContext>, schedule: &NewSchedule) -> Result<Schedule> {
    execute("schedules::create", ctx.schedules.create(schedule)).await
}

pub async fn activate_schedule(ctx: &Arc<AppContext>, id: &str) -> Result<Schedule> {
    execute("schedules::activate", ctx.schedules.activate(id)).await
}

pub async fn delete_schedule(ctx: &Arc<AppContext>, id: &str) -> Result<()> {
    execute("schedules::delete", ctx.schedules.delete(id)).await
}

pub async fn add_slot(
    ctx: &Arc<AppContext>,
    schedule_id: &str,
    slot: &NewScheduleSlot,
) -> Result<ScheduleSlot> {
    execute("schedules::add_slot", ctx.schedules.add_slot(schedule_id, slot)).await
}

pub async fn update_slot(
    ctx: &Arc<AppContext>,
    slot_id: &str,
    update: &ScheduleSlotUpdate,
) -> Result<ScheduleSlot> {
    execute("schedules::update_slot", ctx.schedules.update_slot(slot_id, update)).await
}

pub async fn delete_slot(ctx: &Arc<AppContext>, slot_id: &str) -> Result<()> {
    execute("schedules::delete_slot", ctx.schedules.delete_slot(slot_id)).await
}
