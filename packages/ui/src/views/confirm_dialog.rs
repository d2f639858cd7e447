use dioxus::prelude::*;

use super::ModalOverlay;

/// Yes/no prompt. Dismissing the overlay counts as "no".
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_dismiss: move |_| on_cancel.call(()),
            div {
                class: "confirm-dialog",
                p { class: "confirm-message", "{message}" }
                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
