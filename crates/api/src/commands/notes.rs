//! Note commands

use std::sync::Arc;

use studyhall_domain::{NewNote, Note, NoteQuery, NoteUpdate, Result};

use super::execute;
use crate::context::AppContext;

pub async fn list_notes(ctx: &Arc<AppContext>, query: &NoteQuery) -> Result<Vec<Note>> {
    execute("notes::list", ctx.notes.list(query)).await
}

pub async fn list_public_notes(ctx: &Arc<AppContext>, query: &NoteQuery) -> Result<Vec<Note>> {
    execute("notes::list_public", ctx.notes.list_public(query)).await
}

pub async fn get_note(ctx: &Arc<AppContext>, id: &str) -> Result<Note> {
    execute("notes::get", ctx.notes.get(id)).await
}

pub async fn create_note(ctx: &Arc<AppContext>, note: &NewNote) -> Result<Note> {
    execute("notes::create", ctx.notes.create(note)).await
}

pub async fn update_note(ctx: &Arc<AppContext>, id: &str, update: &NoteUpdate) -> Result<Note> {
    execute("notes::update", ctx.notes.update(id, update)).await
}

pub async fn delete_note(ctx: &Arc<AppContext>, id: &str) -> Result<()> {
    execute("notes::delete", ctx.notes.delete(id)).await
}
