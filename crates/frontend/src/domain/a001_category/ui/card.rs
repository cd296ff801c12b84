use contracts::domain::a001_category::Category;
use leptos::prelude::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

/// One category tile in the grid.
///
/// Shows the order index, the primary name with a status badge, whichever
/// translations are present, and the owning chat id. Edit and delete are
/// surfaced as intents; the controller decides what happens next.
#[component]
pub fn CategoryCard(
    category: Category,
    /// Position in the visible list, drives the entry animation stagger.
    index: usize,
    #[prop(into)] on_edit: Callback<Category>,
    #[prop(into)] on_delete: Callback<Category>,
) -> impl IntoView {
    let status = category.status.display();
    let order_index = category.order_index;
    let name_uz = category.name_uz.clone();
    let chat_id = category.chat_id.clone();
    let created = category.created_at.as_deref().map(format_datetime);
    let has_parent = category.has_parent();

    let languages = vec![
        ("RU", "Русский", category.name_ru.clone()),
        ("EN", "English", category.name_en.clone()),
        ("ЎЗ", "Кириллча", category.name_uz_cyrillic.clone()),
    ];

    let edit_target = category.clone();
    let delete_target = category;

    view! {
        <div class="card" style=format!("animation-delay: {}ms", index * 100)>
            <div class="card__top">
                <div class="card__identity">
                    <div class="card__order">
                        <span class="card__order-index">{format!("#{}", order_index)}</span>
                        <span class="card__order-tag">"POS"</span>
                    </div>
                    <div>
                        <h3 class="card__name">{name_uz}</h3>
                        <span class=format!("badge badge--{}", status.css)>
                            {icon(status.icon)}
                            {status.label}
                        </span>
                    </div>
                </div>
                <div class="card__actions">
                    <button
                        class="card__action"
                        title="Tahrirlash"
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="card__action card__action--danger"
                        title="O'chirish"
                        on:click=move |_| on_delete.run(delete_target.clone())
                    >
                        {icon("trash")}
                    </button>
                </div>
            </div>

            <div class="card__languages">
                {languages
                    .into_iter()
                    .filter_map(|(code, label, value)| {
                        let value = value.filter(|v| !v.is_empty())?;
                        Some(view! {
                            <div class="card__language">
                                <span class="card__language-code">{code}</span>
                                <div class="card__language-text">
                                    <p class="card__language-label">{label}</p>
                                    <p class="card__language-value">{value}</p>
                                </div>
                            </div>
                        })
                    })
                    .collect_view()}
            </div>

            <div class="card__footer">
                <div class="card__chat">
                    <span class="card__chat-icon">{icon("message-circle")}</span>
                    <div>
                        <p class="card__meta-label">"Chat Context"</p>
                        <span class="card__chat-id">{format!("#{}", chat_id)}</span>
                    </div>
                </div>
                <div class="card__footer-side">
                    {created.map(|c| view! { <span class="card__created">{c}</span> })}
                    {has_parent.then(|| view! {
                        <span class="card__sub-badge">
                            {icon("layers")}
                            "Sub"
                        </span>
                    })}
                </div>
            </div>
        </div>
    }
}
