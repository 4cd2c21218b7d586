//! Repository traits for quillpad storage backends.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note and return its assigned id.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Uuid>;

    /// List all notes in store default order (newest first).
    async fn list(&self) -> Result<Vec<Note>>;

    /// Fetch a note by id. A lookup miss is `Ok(None)`, not an error.
    async fn fetch(&self, id: Uuid) -> Result<Option<Note>>;

    /// Overwrite title and body of an existing note.
    ///
    /// Returns [`crate::Error::NoteNotFound`] if no note has the given id.
    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<()>;

    /// Delete a note by id. Idempotent: deleting an absent id succeeds.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check if a note exists.
    async fn exists(&self, id: Uuid) -> Result<bool>;
}

/// Repository for append-only pageview records.
#[async_trait]
pub trait PageviewRepository: Send + Sync {
    /// Persist one visit record, stamping the current time.
    async fn insert(&self, req: RecordPageviewRequest) -> Result<Uuid>;

    /// List all recorded visits, ordered by recording time.
    async fn list(&self) -> Result<Vec<Pageview>>;
}
