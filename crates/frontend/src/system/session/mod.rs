//! Session identity resolution.
//!
//! The active chat id arrives in the URL fragment as `chatId=<value>`. When
//! the fragment changes to a different id mid-session the whole page is
//! reloaded, so every piece of session-scoped state is rebuilt instead of
//! being reconciled against requests issued under the old id.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Fallback chat id used when the fragment carries none.
pub const DEFAULT_CHAT_ID: &str = "7882316826";

/// Extracts the chat id from a URL fragment.
///
/// Looks for the first `chatId=<value>` pair, URL-decodes the value and
/// falls back to [`DEFAULT_CHAT_ID`] when the pair is absent, the value is
/// empty or the encoding is broken.
pub fn chat_id_from_hash(hash: &str) -> String {
    let Some(idx) = hash.find("chatId=") else {
        return DEFAULT_CHAT_ID.to_string();
    };

    let rest = &hash[idx + "chatId=".len()..];
    let value = match rest.find('&') {
        Some(end) => &rest[..end],
        None => rest,
    };

    if value.is_empty() {
        return DEFAULT_CHAT_ID.to_string();
    }

    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => DEFAULT_CHAT_ID.to_string(),
    }
}

/// Resolves the chat id for the current page location.
pub fn resolve_chat_id() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| chat_id_from_hash(&hash))
        .unwrap_or_else(|| DEFAULT_CHAT_ID.to_string())
}

/// Reloads the page whenever the fragment resolves to a different chat id.
pub fn watch_chat_id(active: String) {
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if resolve_chat_id() != active {
            if let Some(window) = window() {
                let _ = window.location().reload();
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = window() {
        let _ = window.add_event_listener_with_callback(
            "hashchange",
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
        );
        // Installed once for the whole app lifetime; keep closure alive.
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_chat_id() {
        assert_eq!(chat_id_from_hash("#chatId=123"), "123");
    }

    #[test]
    fn test_chat_id_among_other_params() {
        assert_eq!(chat_id_from_hash("#/view?chatId=abc&tab=2"), "abc");
    }

    #[test]
    fn test_first_pair_wins() {
        assert_eq!(chat_id_from_hash("#chatId=a&chatId=b"), "a");
    }

    #[test]
    fn test_url_encoded_value_is_decoded() {
        assert_eq!(chat_id_from_hash("#chatId=user%20one"), "user one");
    }

    #[test]
    fn test_missing_or_empty_falls_back_to_default() {
        assert_eq!(chat_id_from_hash(""), DEFAULT_CHAT_ID);
        assert_eq!(chat_id_from_hash("#something-else"), DEFAULT_CHAT_ID);
        assert_eq!(chat_id_from_hash("#chatId="), DEFAULT_CHAT_ID);
    }

    #[test]
    fn test_broken_encoding_falls_back_to_default() {
        assert_eq!(chat_id_from_hash("#chatId=%FF"), DEFAULT_CHAT_ID);
    }
}
