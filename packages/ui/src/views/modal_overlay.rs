use dioxus::prelude::*;

/// Backdrop plus card shared by the note form and the delete prompt.
///
/// Everything that dismisses the dialog without an explicit button press
/// (a click on the backdrop, Escape) is reported through `on_dismiss`, so
/// callers treat it the same as Cancel.
#[component]
pub fn ModalOverlay(on_dismiss: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onclick: move |_| on_dismiss.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_dismiss.call(());
                }
            },
            div {
                class: "modal-card",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                {children}
            }
        }
    }
}
