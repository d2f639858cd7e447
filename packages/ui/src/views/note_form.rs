use api::{Note, NoteDraft};
use dioxus::prelude::*;

use super::ModalOverlay;
use crate::use_repo;

const SAVE_FAILED: &str = "Could not save the note";
const TITLE_REQUIRED: &str = "Title is required";

/// Why `draft` can't be submitted yet, if anything.
fn draft_error(draft: &NoteDraft) -> Option<&'static str> {
    (!draft.has_title()).then_some(TITLE_REQUIRED)
}

/// Modal form for adding a note, or editing `note` when given.
///
/// Saving goes through the repository and hands the refreshed list to
/// `on_saved`. If the save fails the form stays open with the error shown.
#[component]
pub fn NoteForm(
    note: Option<Note>,
    on_saved: EventHandler<Vec<Note>>,
    on_cancel: EventHandler<()>,
) -> Element {
    let repo = use_repo();
    let editing = note.is_some();
    let target = note.as_ref().map(|n| n.id.clone());

    let NoteDraft {
        title: initial_title,
        content: initial_content,
    } = note.as_ref().map(NoteDraft::from).unwrap_or_default();
    let mut title = use_signal(move || initial_title);
    let mut content = use_signal(move || initial_content);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = NoteDraft::new(title(), content());
        if saving() {
            return;
        }
        if let Some(message) = draft_error(&draft) {
            error.set(Some(message.to_string()));
            return;
        }
        let repo = repo.clone();
        let target = target.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            match repo.save(target.as_ref(), &draft).await {
                Ok(notes) => on_saved.call(notes),
                Err(e) => {
                    tracing::error!("Failed to save note: {}", e);
                    saving.set(false);
                    error.set(Some(e.user_message(SAVE_FAILED)));
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_dismiss: move |_| on_cancel.call(()),
            div {
                class: "note-form",
                h2 { if editing { "Edit Note" } else { "Add Note" } }

                if let Some(err) = error() {
                    div { class: "banner banner-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,

                    input {
                        r#type: "text",
                        placeholder: "Title",
                        required: true,
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }

                    textarea {
                        placeholder: "Content",
                        rows: "4",
                        value: content(),
                        oninput: move |evt: FormEvent| content.set(evt.value()),
                    }

                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-success",
                            disabled: saving(),
                            if editing { "Update" } else { "Add" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_reported() {
        assert_eq!(draft_error(&NoteDraft::new("   ", "milk")), Some(TITLE_REQUIRED));
        assert_eq!(draft_error(&NoteDraft::new("", "")), Some(TITLE_REQUIRED));
    }

    #[test]
    fn content_is_optional() {
        assert_eq!(draft_error(&NoteDraft::new("Groceries", "")), None);
    }
}
