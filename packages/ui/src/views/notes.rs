use api::{token, HttpBackend, Note, NotesRepository};
use dioxus::prelude::*;

use super::{ConfirmDialog, NoteForm};
use crate::{use_repo, use_session, Sidebar};

const LOAD_FAILED: &str = "Could not load notes";
const DELETE_FAILED: &str = "Could not delete the note";

/// Fetch the list into `notes`, reporting failures in `error`.
async fn load(
    repo: &NotesRepository<HttpBackend>,
    mut notes: Signal<Vec<Note>>,
    mut error: Signal<Option<String>>,
) {
    match repo.list().await {
        Ok(list) => {
            error.set(None);
            notes.set(list);
        }
        Err(e) => {
            tracing::error!("Failed to load notes: {}", e);
            error.set(Some(e.user_message(LOAD_FAILED)));
        }
    }
}

/// The notes grid with add/edit/delete.
#[component]
pub fn NotesView() -> Element {
    let repo = use_repo();
    let session = use_session();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut editing = use_signal(|| Option::<Note>::None);
    let mut show_form = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Note>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Cosmetic only; a token we can't read just means no name
    let username = use_hook(|| token::display_name_from(session.get().as_deref()));

    // Load notes on mount
    let _loader = use_resource({
        let repo = repo.clone();
        move || {
            let repo = repo.clone();
            async move { load(&repo, notes, error).await }
        }
    });

    let handle_form_cancel = {
        let repo = repo.clone();
        move |_: ()| {
            editing.set(None);
            show_form.set(false);
            let repo = repo.clone();
            spawn(async move { load(&repo, notes, error).await });
        }
    };

    let handle_form_saved = move |list: Vec<Note>| {
        editing.set(None);
        show_form.set(false);
        notes.set(list);
    };

    let handle_confirm_delete = {
        let repo = repo.clone();
        move |_: ()| {
            let Some(note) = pending_delete() else {
                return;
            };
            pending_delete.set(None);
            let repo = repo.clone();
            spawn(async move {
                match repo.delete(&note.id).await {
                    Ok(list) => notes.set(list),
                    Err(e) => {
                        tracing::error!("Failed to delete note {}: {}", note.id, e);
                        error.set(Some(e.user_message(DELETE_FAILED)));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "notes-layout",

            Sidebar { username: username }

            div {
                class: "notes-main",

                div {
                    class: "notes-header",
                    h1 { "My Notes" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                        "Add Note"
                    }
                }

                if let Some(err) = error() {
                    div { class: "banner banner-error", "{err}" }
                }

                if show_form() {
                    NoteForm {
                        note: editing(),
                        on_saved: handle_form_saved,
                        on_cancel: handle_form_cancel,
                    }
                }

                if pending_delete().is_some() {
                    ConfirmDialog {
                        message: "Are you sure you want to delete this note?",
                        on_confirm: handle_confirm_delete,
                        on_cancel: move |_| pending_delete.set(None),
                    }
                }

                div {
                    class: "notes-grid",
                    for note in notes() {
                        div {
                            key: "{note.id}",
                            class: "note-card",
                            h2 { class: "note-title", "{note.title}" }
                            p { class: "note-content", "{note.content}" }
                            div {
                                class: "note-actions",
                                button {
                                    class: "link-btn",
                                    onclick: {
                                        let note = note.clone();
                                        move |_| {
                                            editing.set(Some(note.clone()));
                                            show_form.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "link-btn link-btn-danger",
                                    onclick: {
                                        let note = note.clone();
                                        move |_| pending_delete.set(Some(note.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
