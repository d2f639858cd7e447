use dioxus::prelude::*;

use crate::auth::use_session;
use crate::gate::{self, GateDecision, Location};
use crate::views::{LoginView, NotesView, RegisterView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/notes")]
    Notes {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl From<Location> for Route {
    fn from(location: Location) -> Self {
        match location {
            Location::Login => Route::Login {},
            Location::Register => Route::Register {},
            Location::Notes => Route::Notes {},
        }
    }
}

/// Render `children` only if the gate admits `location`; otherwise replace
/// the current route with the redirect target.
#[component]
pub fn AuthGate(location: Location, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    match gate::check(Some(location), session.has_token()) {
        GateDecision::Render(_) => rsx! {
            {children}
        },
        GateDecision::Redirect(target) => {
            tracing::debug!("No session for {}, redirecting", location.path());
            nav.replace(Route::from(target));
            rsx! {}
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginView {}
    }
}

#[component]
fn Register() -> Element {
    rsx! {
        RegisterView {}
    }
}

#[component]
fn Notes() -> Element {
    rsx! {
        AuthGate {
            location: Location::Notes,
            NotesView {}
        }
    }
}

/// Anything the table doesn't know. `/notes/` style variants are normalised,
/// everything else lands on `/login`.
#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let path = format!("/{}", segments.join("/"));
    let decision = gate::check(Location::from_path(&path), session.has_token());
    tracing::debug!("Unknown route {}, going to {}", path, decision.location().path());
    nav.replace(Route::from(decision.location()));

    rsx! {}
}
