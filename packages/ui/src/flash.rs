use dioxus::prelude::*;

/// A one-shot message carried from one view to the next, e.g. the
/// registration confirmation shown on the login page.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash(pub String);

pub fn use_flash() -> Signal<Option<Flash>> {
    use_context::<Signal<Option<Flash>>>()
}

/// Consume the pending flash when the calling component mounts.
///
/// The notice stays with that component for its lifetime; the next view to
/// mount finds the slot empty.
pub fn use_flash_notice() -> Option<Flash> {
    let mut flash = use_flash();
    use_hook(move || flash.take())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static SEEN: RefCell<Vec<Option<String>>> = const { RefCell::new(Vec::new()) };
    }

    #[allow(non_snake_case)]
    fn Reader() -> Element {
        let notice = use_flash_notice();
        SEEN.with(|seen| seen.borrow_mut().push(notice.map(|Flash(m)| m)));
        rsx! {}
    }

    fn app() -> Element {
        use_context_provider(|| Signal::new(Some(Flash("Registered".to_string()))));
        rsx! {
            Reader {}
            Reader {}
        }
    }

    #[test]
    fn notice_is_shown_once() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert_eq!(seen, vec![Some("Registered".to_string()), None]);
    }
}
