use contracts::system::account::User;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::theme::Theme;

/// Sticky top bar: brand block, session owner, refresh and theme controls.
#[component]
pub fn Header(
    user: User,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] on_refresh: Callback<()>,
    #[prop(into)] on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let full_name = format!("{} {}", user.firstname, user.lastname);
    let chat_id = user.chat_id;

    view! {
        <header class="header">
            <div class="header__panel">
                <div class="header__brand">
                    <div class="header__logo">{icon("layers")}</div>
                    <div class="header__brand-text">
                        <h1 class="header__title">
                            "KATEGORIYA"
                            <span class="header__title-accent">"PRO"</span>
                        </h1>
                        <p class="header__tagline">"Spatial Intelligence"</p>
                    </div>
                </div>

                <div class="header__actions">
                    <div class="header__identity">
                        <p class="header__user-name">{full_name}</p>
                        <div class="header__user-meta">
                            <span class="header__pulse" aria-hidden="true"></span>
                            <span class="header__user-id">"ID: " {chat_id}</span>
                        </div>
                    </div>

                    <div class="header__controls">
                        <button
                            class="header__control"
                            title="Yangilash"
                            on:click=move |_| on_refresh.run(())
                        >
                            {icon("refresh")}
                        </button>
                        <button
                            class="header__control"
                            title="Mavzuni almashtirish"
                            on:click=move |_| on_toggle_theme.run(())
                        >
                            {move || if theme.get().is_dark() {
                                icon("sun")
                            } else {
                                icon("moon")
                            }}
                        </button>
                    </div>

                    <div class="header__avatar">
                        <div class="header__avatar-ring">
                            <div class="header__avatar-face">{icon("user")}</div>
                        </div>
                        <span class="header__avatar-status" aria-hidden="true"></span>
                    </div>
                </div>
            </div>
        </header>
    }
}
