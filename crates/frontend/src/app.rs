//! Application controller.
//!
//! Owns every piece of mutable UI state: the session user, the canonical
//! category collection, search text, theme, modal and dialog visibility and
//! the toast queue. Children are pure views wired up with read signals and
//! callbacks; nothing is shared through context. All remote calls happen
//! here, and every mutation is followed by a full list refetch instead of
//! patching local state.

use contracts::domain::a001_category::{Category, CategoryDraft};
use contracts::system::account::User;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a001_category::ui::list::{visible_categories, CategoryList};
use crate::layout::{Header, LoadingScreen};
use crate::shared::api_utils::ApiError;
use crate::shared::confirm::ConfirmDialog;
use crate::shared::theme::{apply_theme, load_theme_from_storage, save_theme_to_storage};
use crate::shared::toast::{ToastHost, ToastKind, ToastMessage};
use crate::system::account::api as account_api;
use crate::system::session;

#[component]
pub fn App() -> impl IntoView {
    // Session identity is fixed for the lifetime of the page; a fragment
    // change to a different id forces a full reload instead of a state
    // transition.
    let chat_id = session::resolve_chat_id();
    session::watch_chat_id(chat_id.clone());
    let chat_id = StoredValue::new(chat_id);

    let user = RwSignal::new(None::<User>);
    let categories = RwSignal::new(Vec::<Category>::new());
    let search_query = RwSignal::new(String::new());
    let theme = RwSignal::new(load_theme_from_storage());
    let toasts = RwSignal::new(Vec::<ToastMessage>::new());

    let editing = RwSignal::new(None::<Category>);
    let modal_open = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let confirm_target = RwSignal::new(None::<Category>);
    let confirm_loading = RwSignal::new(false);

    let push_toast = move |message: &str, kind: ToastKind| {
        toasts.update(|list| list.push(ToastMessage::new(message, kind)));
    };

    // Search never mutates the canonical collection; the visible list is
    // recomputed from collection + query.
    let visible = Memo::new(move |_| visible_categories(&categories.get(), &search_query.get()));

    Effect::new(move |_| {
        let current = theme.get();
        apply_theme(current);
        save_theme_to_storage(current);
    });

    // Session gate: look the user up, and only a confirmed one opens the
    // main view. Both lookup failure and an unconfirmed profile leave the
    // splash on screen with a toast.
    spawn_local(async move {
        match account_api::find_user_by_chat_id(&chat_id.get_value()).await {
            Ok(found) if found.is_confirmed() => {
                // The splash stays up until the first list fetch settles; a
                // failed fetch still opens the main view, empty plus a toast.
                refresh_categories(categories, toasts).await;
                user.set(Some(found));
            }
            Ok(_) => push_toast("Profilingiz tasdiqlanmagan!", ToastKind::Error),
            Err(error) => {
                log::error!("user lookup failed: {error}");
                push_toast("Foydalanuvchi topilmadi!", ToastKind::Error);
            }
        }
    });

    let dismiss_toast = Callback::new(move |id: Uuid| {
        toasts.update(|list| list.retain(|toast| toast.id != id));
    });

    let on_search = Callback::new(move |query: String| search_query.set(query));

    let toggle_theme = Callback::new(move |_: ()| theme.update(|t| *t = t.toggled()));

    let refresh = Callback::new(move |_: ()| {
        spawn_local(refresh_categories(categories, toasts));
    });

    let open_create = Callback::new(move |_: ()| {
        editing.set(None);
        modal_open.set(true);
    });

    let open_edit = Callback::new(move |category: Category| {
        editing.set(Some(category));
        modal_open.set(true);
    });

    let close_modal = Callback::new(move |_: ()| {
        modal_open.set(false);
        editing.set(None);
    });

    let submit_draft = Callback::new(move |draft: CategoryDraft| {
        let edit_id = editing.get_untracked().map(|category| category.id);
        saving.set(true);
        spawn_local(async move {
            let outcome = match edit_id.as_deref() {
                Some(id) => api::update_category(id, &draft.to_update_dto()).await,
                None => api::create_category(&draft.to_create_dto()).await,
            };
            match outcome {
                Ok(()) => {
                    let text = if edit_id.is_some() {
                        "Kategoriya muvaffaqiyatli yangilandi"
                    } else {
                        "Yangi kategoriya qo'shildi"
                    };
                    push_toast(text, ToastKind::Success);
                    refresh_categories(categories, toasts).await;
                    modal_open.set(false);
                    editing.set(None);
                }
                Err(error) => {
                    // Modal stays open so the draft can be corrected.
                    log::error!("save category failed: {error}");
                    let text = error.server_message().map(str::to_string).unwrap_or_else(
                        || match error {
                            ApiError::Network(_) => "Xatolik yuz berdi!".to_string(),
                            _ => "Amal bajarilmadi".to_string(),
                        },
                    );
                    push_toast(&text, ToastKind::Error);
                }
            }
            saving.set(false);
        });
    });

    let request_delete = Callback::new(move |category: Category| {
        confirm_target.set(Some(category));
    });

    let close_confirm = Callback::new(move |_: ()| confirm_target.set(None));

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(target) = confirm_target.get_untracked() else {
            return;
        };
        confirm_loading.set(true);
        spawn_local(async move {
            match api::delete_category(&target.id).await {
                Ok(()) => {
                    push_toast("Muvaffaqiyatli o'chirildi", ToastKind::Success);
                    refresh_categories(categories, toasts).await;
                }
                Err(error) => {
                    log::error!("delete category failed: {error}");
                    push_toast("O'chirishda xatolik!", ToastKind::Error);
                }
            }
            // Dialog closes and re-arms no matter how the call went.
            confirm_target.set(None);
            confirm_loading.set(false);
        });
    });

    view! {
        {move || match user.get() {
            Some(current) => view! {
                <Header
                    user=current
                    theme=theme
                    on_refresh=refresh
                    on_toggle_theme=toggle_theme
                />
                <main class="page">
                    <CategoryList
                        categories=categories
                        visible=visible
                        search_query=search_query
                        on_search=on_search
                        on_create=open_create
                        on_edit=open_edit
                        on_delete=request_delete
                    />
                </main>
            }
            .into_any(),
            None => view! { <LoadingScreen/> }.into_any(),
        }}

        {move || {
            modal_open.get().then(|| view! {
                <CategoryDetails
                    editing=editing.get()
                    chat_id=chat_id.get_value()
                    categories=categories
                    saving=saving
                    on_submit=submit_draft
                    on_close=close_modal
                />
            })
        }}

        {move || {
            confirm_target.get().map(|target| {
                let message = format!("\"{}\" kategoriyasi o'chirilsinmi?", target.name_uz);
                view! {
                    <ConfirmDialog
                        title="O'chirish".to_string()
                        message=message
                        loading=confirm_loading
                        on_confirm=confirm_delete
                        on_close=close_confirm
                    />
                }
            })
        }}

        <ToastHost toasts=toasts on_dismiss=dismiss_toast/>
    }
}

/// Replaces the canonical collection with a fresh server copy.
///
/// Every mutation workflow awaits this before it reports itself done, so the
/// view never shows locally-patched state.
async fn refresh_categories(categories: RwSignal<Vec<Category>>, toasts: RwSignal<Vec<ToastMessage>>) {
    store_fetch_outcome(api::fetch_categories().await, categories, toasts);
}

/// A successful fetch replaces the whole slice; a failed one leaves the
/// collection as last fetched and reports through a toast.
fn store_fetch_outcome(
    outcome: Result<Vec<Category>, ApiError>,
    categories: RwSignal<Vec<Category>>,
    toasts: RwSignal<Vec<ToastMessage>>,
) {
    match outcome {
        Ok(list) => categories.set(list),
        Err(error) => {
            log::error!("category list fetch failed: {error}");
            toasts.update(|list| {
                list.push(ToastMessage::new(
                    "Ma'lumotlarni yuklab bo'lmadi!",
                    ToastKind::Error,
                ))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryStatus;

    fn category(id: &str, name_uz: &str) -> Category {
        Category {
            id: id.to_string(),
            name_uz: name_uz.to_string(),
            name_uz_cyrillic: None,
            name_ru: None,
            name_en: None,
            order_index: 0,
            status: CategoryStatus::Open,
            chat_id: "chat-1".to_string(),
            parent_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_successful_fetch_replaces_the_whole_collection() {
        let categories = RwSignal::new(vec![category("1", "Old")]);
        let toasts = RwSignal::new(Vec::new());

        store_fetch_outcome(
            Ok(vec![category("2", "Kiyim"), category("3", "Texnika")]),
            categories,
            toasts,
        );

        let names: Vec<String> = categories
            .get_untracked()
            .iter()
            .map(|c| c.name_uz.clone())
            .collect();
        assert_eq!(names, vec!["Kiyim", "Texnika"]);
        assert!(toasts.get_untracked().is_empty());
    }

    #[test]
    fn test_failed_fetch_keeps_collection_and_toasts() {
        let categories = RwSignal::new(Vec::new());
        let toasts = RwSignal::new(Vec::new());

        store_fetch_outcome(Err(ApiError::Fetch(500)), categories, toasts);

        assert!(categories.get_untracked().is_empty());
        let queued = toasts.get_untracked();
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].message, "Ma'lumotlarni yuklab bo'lmadi!");
        assert_eq!(queued[0].kind, ToastKind::Error);
    }
}
