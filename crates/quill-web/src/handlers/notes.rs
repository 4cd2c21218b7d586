//! Note page and mutation handlers.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use uuid::Uuid;

use quill_core::{CreateNoteRequest, Note, NoteRepository, UpdateNoteRequest};

use crate::render::markdown_to_html;
use crate::{ApiError, AppState};

/// Sidebar entry for the note list shown on every note page.
pub struct NoteListItem {
    pub id: Uuid,
    pub title: String,
}

impl From<&Note> for NoteListItem {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.display_title().to_string(),
        }
    }
}

/// The note currently being viewed, body already rendered from markdown.
pub struct CurrentNote {
    pub id: Uuid,
    pub title: String,
    pub body_html: String,
}

impl From<Note> for CurrentNote {
    fn from(note: Note) -> Self {
        let title = note.display_title().to_string();
        Self {
            id: note.id,
            title,
            body_html: markdown_to_html(note.body.as_deref().unwrap_or("")),
        }
    }
}

/// Raw note values prefilled into the edit form.
pub struct EditableNote {
    pub id: Uuid,
    pub title: String,
    pub body: String,
}

impl From<Note> for EditableNote {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title.unwrap_or_default(),
            body: note.body.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub notes: Vec<NoteListItem>,
}

#[derive(Template)]
#[template(path = "new.html")]
pub struct NewNoteTemplate {
    pub notes: Vec<NoteListItem>,
}

#[derive(Template)]
#[template(path = "show.html")]
pub struct ShowNoteTemplate {
    pub notes: Vec<NoteListItem>,
    pub current: Option<CurrentNote>,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditNoteTemplate {
    pub notes: Vec<NoteListItem>,
    pub current: Option<EditableNote>,
}

async fn note_list_items(state: &AppState) -> Result<Vec<NoteListItem>, ApiError> {
    let notes = state.db.notes.list().await?;
    Ok(notes.iter().map(NoteListItem::from).collect())
}

/// `GET /` — list all notes.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let template = IndexTemplate {
        notes: note_list_items(&state).await?,
    };
    Ok(Html(template.render()?))
}

/// `GET /notes/new` — note creation form alongside the existing notes.
pub async fn new_note_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let template = NewNoteTemplate {
        notes: note_list_items(&state).await?,
    };
    Ok(Html(template.render()?))
}

/// `POST /notes` — create a note from the submitted form, then redirect home.
///
/// No field validation: absent or empty title/body are stored as-is.
pub async fn create_note(
    State(state): State<AppState>,
    Form(req): Form<CreateNoteRequest>,
) -> Result<Redirect, ApiError> {
    state.db.notes.insert(req).await?;
    Ok(Redirect::to("/"))
}

/// `GET /notes/:id` — render one note with the full note list.
///
/// An unknown id renders the page without a current note instead of a 404.
pub async fn show_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let notes = note_list_items(&state).await?;
    let current = state.db.notes.fetch(id).await?.map(CurrentNote::from);
    let template = ShowNoteTemplate { notes, current };
    Ok(Html(template.render()?))
}

/// `GET /notes/:id/edit` — edit form for one note.
pub async fn edit_note_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let notes = note_list_items(&state).await?;
    let current = state.db.notes.fetch(id).await?.map(EditableNote::from);
    let template = EditNoteTemplate { notes, current };
    Ok(Html(template.render()?))
}

/// `PATCH /notes/:id` — overwrite title and body; responds 204 on success.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(req): Form<UpdateNoteRequest>,
) -> Result<StatusCode, ApiError> {
    state.db.notes.update(id, req).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /notes/:id` — delete by id; 204 whether or not the note existed.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.db.notes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(title: Option<&str>, body: Option<&str>) -> Note {
        Note {
            id: Uuid::now_v7(),
            title: title.map(String::from),
            body: body.map(String::from),
            created_at_utc: Utc::now(),
            updated_at_utc: Utc::now(),
        }
    }

    #[test]
    fn test_current_note_renders_markdown_body() {
        let current = CurrentNote::from(note(Some("T"), Some("# Heading\n\nbody")));
        assert!(current.body_html.contains("<h1>"));
        assert!(current.body_html.contains("<p>body</p>"));
    }

    #[test]
    fn test_current_note_handles_missing_body() {
        let current = CurrentNote::from(note(Some("T"), None));
        assert!(current.body_html.is_empty());
    }

    #[test]
    fn test_list_item_falls_back_to_untitled() {
        let item = NoteListItem::from(&note(None, Some("body")));
        assert_eq!(item.title, "Untitled");
    }

    #[test]
    fn test_index_template_renders_note_links() {
        let n = note(Some("First"), None);
        let id = n.id;
        let template = IndexTemplate {
            notes: vec![NoteListItem::from(&n)],
        };
        let html = template.render().expect("render failed");
        assert!(html.contains("First"));
        assert!(html.contains(&format!("/notes/{}", id)));
    }

    #[test]
    fn test_show_template_without_current_note_degrades() {
        let template = ShowNoteTemplate {
            notes: Vec::new(),
            current: None,
        };
        let html = template.render().expect("render failed");
        assert!(html.contains("No note selected"));
    }

    #[test]
    fn test_edit_template_prefills_fields() {
        let template = EditNoteTemplate {
            notes: Vec::new(),
            current: Some(EditableNote::from(note(Some("Draft"), Some("text")))),
        };
        let html = template.render().expect("render failed");
        assert!(html.contains("Draft"));
        assert!(html.contains("text"));
    }

    #[test]
    fn test_edit_template_lists_sidebar_notes() {
        let sidebar = note(Some("Other note"), None);
        let editing = note(Some("Draft"), Some("text"));
        let template = EditNoteTemplate {
            notes: vec![NoteListItem::from(&sidebar)],
            current: Some(EditableNote::from(editing)),
        };
        let html = template.render().expect("render failed");
        assert!(html.contains("Other note"));
        assert!(html.contains(&format!("/notes/{}", sidebar.id)));
    }
}
