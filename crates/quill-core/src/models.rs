//! Domain models for quillpad.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A user-authored text entry with an optional title and markdown body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    /// Optional title; no constraint is enforced on content or length.
    pub title: Option<String>,
    /// Markdown source. Rendered to HTML at view time, stored as-is.
    pub body: Option<String>,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

impl Note {
    /// Title to display in lists, falling back for untitled notes.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => "Untitled",
        }
    }
}

// =============================================================================
// PAGEVIEW TYPES
// =============================================================================

/// A log record of one HTTP request to a page-rendering route.
///
/// Append-only: pageviews are never updated or deleted by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pageview {
    pub id: Uuid,
    /// The requested URL path, exact (no normalization).
    pub path: String,
    /// Stamped with the current time as each record is constructed.
    pub recorded_at_utc: DateTime<Utc>,
    /// Value of the request's User-Agent header, when present.
    pub user_agent: Option<String>,
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request for creating a new note.
///
/// No field validation is performed: absent or empty title/body are
/// accepted as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Request for updating an existing note.
///
/// Title and body are overwritten wholesale; the id is preserved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Request for recording a single page visit.
#[derive(Debug, Clone)]
pub struct RecordPageviewRequest {
    pub path: String,
    pub user_agent: Option<String>,
}
