//! Class commands

use std::sync::Arc;

use studyhall_domain::{Class, ClassUpdate, Homework, NewClass, Result};

use super::execute;
use crate::context::AppContext;

pub async fn list_classes(ctx: &Arc<AppContext>) -> Result<Vec<Class>> {
    execute("classes::list", ctx.classes.list()).await
}

pub async fn get_class(ctx: &Arc<AppContext>, id: &str) -> Result<Class> {
    execute("classes::get", ctx.classes.get(id)).await
}

pub async fn create_class(ctx: &Arc<AppContext>, class: &NewClass) -> Result<Class> {
    execute("classes::create", ctx.classes.create(class)).await
}

pub async fn update_class(ctx: &Arc<AppContext>, id: &str, update: &ClassUpdate) -> Result<Class> {
    execute("classes::update", ctx.classes.update(id, update)).await
}

pub async fn delete_class(ctx: &Arc<AppContext>, id: &str) -> Result<()> {
    execute("classes::delete", ctx.classes.delete(id)).await
}

/// Homework assigned for one class
pub async fn class_homework(ctx: &Arc<AppContext>, id: &str) -> Result<Vec<Homework>> {
    execute("classes::homework", ctx.classes.homework(id)).await
}
