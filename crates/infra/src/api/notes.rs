//! Typed client for the notes resource

use std::sync::Arc;

use studyhall_domain::{NewNote, Note, NoteQuery, NoteUpdate, Result};

use super::client::BackendClient;

/// `/api/notes` surface
#[derive(Debug)]
pub struct NotesApi {
    client: Arc<BackendClient>,
}

impl NotesApi {
    #[must_use]
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    /// The caller's own notes
    pub async fn list(&self, query: &NoteQuery) -> Result<Vec<Note>> {
        self.client.get_with_query("/api/notes", query).await
    }

    /// Notes shared publicly by other students
    pub async fn list_public(&self, query: &NoteQuery) -> Result<Vec<Note>> {
        self.client.get_with_query("/api/notes/public", query).await
    }

    pub async fn get(&self, id: &str) -> Result<Note> {
        self.client.get(&format!("/api/notes/{id}")).await
    }

    pub async fn create(&self, note: &NewNote) -> Result<Note> {
        self.client.post("/api/notes", note).await
    }

    pub async fn update(&self, id: &str, update: &NoteUpdate) -> Result<Note> {
        self.client.put(&format!("/api/notes/{id}"), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/api/notes/{id}")).await
    }
}
