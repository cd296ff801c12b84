use leptos::prelude::*;

use crate::shared::icons::icon;

/// Full-viewport splash shown until the session gate passes.
///
/// Also the terminal screen when the user lookup fails; the failure itself
/// is reported through a toast.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner">
                <span class="loading__ring" aria-hidden="true"></span>
                <span class="loading__logo">{icon("layers")}</span>
            </div>
            <p class="loading__text">"Yuklanmoqda..."</p>
            <p class="loading__brand">"Kategoriya Pro"</p>
        </div>
    }
}
