//! Transient toast notifications.
//!
//! Toasts stack in the top-right corner, auto-expire after a fixed display
//! window and can be dismissed early by clicking. Every toast carries its own
//! timer; dismissing one never touches the timers of the others.

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen before it removes itself.
pub const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    /// CSS modifier for the toast card.
    pub fn css(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }

    /// Icon shown next to the message.
    pub fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "warning",
            ToastKind::Info => "message-circle",
            ToastKind::Warning => "warning",
        }
    }
}

/// One queued notification. The id is random so that two toasts with the
/// same text still get independent rows and timers.
#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }
}

/// Renders the toast stack. Mounted outside the ready gate so notifications
/// show on the loading screen as well as the main view.
#[component]
pub fn ToastHost(
    #[prop(into)] toasts: Signal<Vec<ToastMessage>>,
    #[prop(into)] on_dismiss: Callback<Uuid>,
) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! { <ToastItem toast=toast on_dismiss=on_dismiss/> }
                }
            />
        </div>
    }
}

/// Whether a fired timer may still dismiss its toast.
///
/// The flag is read back with `try_get_value`, so a disposed scope (`None`)
/// counts as cancelled, same as an early manual dismissal.
fn expiry_due(cancelled: Option<bool>) -> bool {
    !cancelled.unwrap_or(true)
}

#[component]
fn ToastItem(toast: ToastMessage, #[prop(into)] on_dismiss: Callback<Uuid>) -> impl IntoView {
    let id = toast.id;
    let kind = toast.kind;
    let message = toast.message;

    // Flipped on unmount: an early click removes the row, and the expiry
    // below must not fire against a list that no longer holds this toast.
    let cancelled = StoredValue::new(false);
    on_cleanup(move || {
        cancelled.set_value(true);
    });

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        if expiry_due(cancelled.try_get_value()) {
            on_dismiss.run(id);
        }
    });

    view! {
        <div
            class=format!("toast toast--{}", kind.css())
            on:click=move |_| on_dismiss.run(id)
        >
            <span class="toast__icon">{crate::shared::icons::icon(kind.icon_name())}</span>
            <span class="toast__message">{message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_still_gets_distinct_ids() {
        let a = ToastMessage::new("Saqlangan", ToastKind::Success);
        let b = ToastMessage::new("Saqlangan", ToastKind::Success);
        assert_ne!(a.id, b.id);
        assert_eq!(a.message, b.message);
        assert_eq!(a.kind, b.kind);
    }

    #[test]
    fn test_expiry_window_is_four_seconds() {
        assert_eq!(TOAST_LIFETIME_MS, 4000);
    }

    #[test]
    fn test_expiry_fires_only_while_armed() {
        assert!(expiry_due(Some(false)));
        // early dismissal flips the flag and disarms the pending expiry
        assert!(!expiry_due(Some(true)));
        // a disposed scope counts as cancelled
        assert!(!expiry_due(None));
    }

    #[test]
    fn test_kind_mappings_are_total() {
        let kinds = [
            ToastKind::Success,
            ToastKind::Error,
            ToastKind::Info,
            ToastKind::Warning,
        ];
        for kind in kinds {
            assert!(!kind.css().is_empty());
            assert!(!kind.icon_name().is_empty());
        }
        assert_eq!(ToastKind::Success.css(), "success");
        assert_eq!(ToastKind::Error.icon_name(), "warning");
    }
}
