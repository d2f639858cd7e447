//! # Display claim extraction
//!
//! The sidebar greets the user by name, and the only place the client has a
//! name is inside the bearer token. Tokens are three `.`-separated segments;
//! the middle one is base64-encoded JSON whose `sub` claim is the username.
//!
//! Nothing here verifies anything: the signature is ignored and the claim is
//! purely cosmetic. Every failure (wrong segment count, bad base64, bad JSON,
//! missing or non-string `sub`) yields `None`.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;

#[derive(Deserialize)]
struct DisplayClaims {
    sub: Option<String>,
}

/// The `sub` claim of `token`, if it can be read.
pub fn display_name(token: &str) -> Option<String> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;
    let claims: DisplayClaims = serde_json::from_slice(&bytes).ok()?;
    claims.sub.filter(|sub| !sub.is_empty())
}

/// [`display_name`] over an optional session value.
pub fn display_name_from(token: Option<&str>) -> Option<String> {
    token.and_then(display_name)
}
