//! Homework commands

use std::sync::Arc;

use studyhall_domain::{Homework, HomeworkQuery, HomeworkUpdate, NewHomework, Result};

use super::execute;
use crate::context::AppContext;

pub async fn list_homework(ctx: &Arc<AppContext>, query: &HomeworkQuery) -> Result<Vec<Homework>> {
    execute("homework::list", ctx.homework.list(query)).await
}

pub async fn get_homework(ctx: &Arc<AppContext>, id: &str) -> Result<Homework> {
    execute("homework::get", ctx.homework.get(id)).await
}

/// Homework due within the given window (backend default when `None`)
pub async fn upcoming_homework(ctx: &Arc<AppContext>, days: Option<u32>) -> Result<Vec<Homework>> {
    execute("homework::upcoming", ctx.homework.upcoming(days)).await
}

pub async fn due_today(ctx: &Arc<AppContext>) -> Result<Vec<Homework>> {
    execute("homework::due_today", ctx.homework.due_today()).await
}

pub async fn overdue(ctx: &Arc<AppContext>) -> Result<Vec<Homework>> {
    execute("homework::overdue", ctx.homework.overdue()).await
}

pub async fn complete_homework(ctx: &Arc<AppContext>, id: &str) -> Result<Homework> {
    execute("homework::complete", ctx.homework.complete(id)).await
}

pub async fn reopen_homework(ctx: &Arc<AppContext>, id: &str) -> Result<Homework> {
    execute("homework::reopen", ctx.homework.reopen(id)).await
}

pub async fn create_homework(ctx: &Arc<AppContext>, homework: &NewHomework) -> Result<Homework> {
    execute("homework::create", ctx.homework.create(homework)).await
}

pub async fn update_homework(
    ctx: &Arc<AppContext>,
    id: &str,
    update: &HomeworkUpdate,
) -> Result<Homework> {
    execute("homework::update", ctx.homework.update(id, update)).await
}

pub async fn delete_homework(ctx: &Arc<AppContext>, id: &str) -> Result<()> {
    execute("homework::delete", ctx.homework.delete(id)).await
}
