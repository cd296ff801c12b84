//! Yes/no confirmation dialog.
//!
//! Configured per invocation with a title, message and confirm callback.
//! While the loading flag is set both buttons are disabled and the backdrop
//! stops dismissing the dialog, so a deletion in flight can neither be
//! re-submitted nor cancelled from under itself.

use leptos::prelude::*;

/// A backdrop click dismisses the surface only while no action is in
/// flight.
pub fn backdrop_dismisses(loading: bool) -> bool {
    !loading
}

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let backdrop_click = move |_| {
        if backdrop_dismisses(loading.get()) {
            on_close.run(());
        }
    };

    view! {
        <div class="confirm">
            <div class="confirm__backdrop" on:click=backdrop_click></div>
            <div class="confirm__dialog">
                <div class="confirm__icon">{crate::shared::icons::icon("warning")}</div>
                <h3 class="confirm__title">{title}</h3>
                <p class="confirm__message">{message}</p>
                <div class="confirm__actions">
                    <button
                        type="button"
                        class="btn btn--ghost confirm__cancel"
                        disabled=move || loading.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Yo'q"
                    </button>
                    <button
                        type="button"
                        class="btn btn--danger confirm__accept"
                        disabled=move || loading.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if loading.get() {
                            view! { <span class="spinner" aria-hidden="true"></span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }}
                        "Ha, o'chirilsin"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_is_inert_exactly_while_loading() {
        assert!(backdrop_dismisses(false));
        assert!(!backdrop_dismisses(true));
    }
}
