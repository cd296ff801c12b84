use contracts::domain::a001_category::{Category, CategoryDraft};
use leptos::prelude::*;

use super::view_model::CategoryDetailsViewModel;
use crate::shared::confirm::backdrop_dismisses;
use crate::shared::icons::icon;

/// Modal form for creating or editing one category.
///
/// The parent picker is only offered in create mode; a category's parent is
/// immutable after creation.
#[component]
pub fn CategoryDetails(
    /// Edit target; `None` opens the form in create mode.
    editing: Option<Category>,
    /// Active session, stamped into new drafts.
    chat_id: String,
    /// Canonical collection, for the parent picker options.
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    /// Set by the controller while the save workflow runs.
    #[prop(into)]
    saving: Signal<bool>,
    #[prop(into)] on_submit: Callback<CategoryDraft>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(editing.as_ref(), &chat_id);
    let is_edit = vm.is_edit_mode();
    let edit_id = vm.edit_id().map(|id| id.to_string());

    let title = if is_edit {
        "Kategoriyani Tahrirlash"
    } else {
        "Yangi Kategoriya"
    };
    let subtitle = if is_edit {
        "Eski qiymatlar tahrirlash uchun tayyor"
    } else {
        "Kategoriya ma'lumotlarini kiriting"
    };
    let submit_label = if is_edit {
        "O'ZGARISHLARNI SAQLASH"
    } else {
        "KATEGORIYANI QO'SHISH"
    };

    let backdrop_click = move |_| {
        if backdrop_dismisses(saving.get()) {
            on_close.run(());
        }
    };

    let submit = {
        let vm = vm.clone();
        move || {
            if saving.get_untracked() {
                return;
            }
            let draft = vm.form.get_untracked();
            if draft.name_uz.trim().is_empty() {
                return;
            }
            on_submit.run(draft);
        }
    };
    let submit_from_form = submit.clone();

    view! {
        <div class="modal">
            <div class="modal__backdrop" on:click=backdrop_click></div>
            <div class="modal__dialog">
                <div class="modal__header">
                    <div>
                        <h2 class="modal__title">
                            {title}
                            {
                                let vm = vm.clone();
                                move || vm.ai_loading.get().then(|| view! {
                                    <span class="modal__title-spark">{icon("sparkles")}</span>
                                })
                            }
                        </h2>
                        <p class="modal__subtitle">{subtitle}</p>
                    </div>
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <form
                    class="modal__body"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit_from_form();
                    }
                >
                    <div class="form__group">
                        <label class="form__label">"Asosiy Nomi (Lotinchada) *"</label>
                        <div class="form__row">
                            <input
                                type="text"
                                class="form__input form__input--primary"
                                placeholder="Kategoriya nomi..."
                                required
                                prop:value={
                                    let vm = vm.clone();
                                    move || vm.form.get().name_uz
                                }
                                on:input={
                                    let vm = vm.clone();
                                    move |ev| {
                                        vm.form.update(|f| f.name_uz = event_target_value(&ev));
                                    }
                                }
                            />
                            <button
                                type="button"
                                class="form__ai-button"
                                title="AI yordamida to'ldirish"
                                disabled={
                                    let vm = vm.clone();
                                    move || vm.autofill_blocked()
                                }
                                on:click={
                                    let vm = vm.clone();
                                    move |_| vm.autofill_command()
                                }
                            >
                                {
                                    let vm = vm.clone();
                                    move || if vm.ai_loading.get() {
                                        view! { <span class="spinner" aria-hidden="true"></span> }
                                            .into_any()
                                    } else {
                                        icon("sparkles")
                                    }
                                }
                            </button>
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Kirillcha Nomi"</label>
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Кириллча номи..."
                            prop:value={
                                let vm = vm.clone();
                                move || vm.form.get().name_uz_cyrillic
                            }
                            on:input={
                                let vm = vm.clone();
                                move |ev| {
                                    vm.form.update(|f| f.name_uz_cyrillic = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Ruscha Nomi"</label>
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Название на русском..."
                            prop:value={
                                let vm = vm.clone();
                                move || vm.form.get().name_ru
                            }
                            on:input={
                                let vm = vm.clone();
                                move |ev| {
                                    vm.form.update(|f| f.name_ru = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Inglizcha Nomi"</label>
                        <input
                            type="text"
                            class="form__input"
                            placeholder="English name..."
                            prop:value={
                                let vm = vm.clone();
                                move || vm.form.get().name_en
                            }
                            on:input={
                                let vm = vm.clone();
                                move |ev| {
                                    vm.form.update(|f| f.name_en = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form__grid">
                        <div class="form__group">
                            <label class="form__label">"Tartib Indeksi"</label>
                            <input
                                type="number"
                                class="form__input form__input--centered"
                                prop:value={
                                    let vm = vm.clone();
                                    move || vm.form.get().order_index
                                }
                                on:input={
                                    let vm = vm.clone();
                                    move |ev| {
                                        vm.form.update(|f| f.order_index = event_target_value(&ev));
                                    }
                                }
                            />
                        </div>

                        <div class="form__group" class:form__group--locked=is_edit>
                            <label class="form__label">"Parent Category"</label>
                            <div class="form__select-wrap">
                                <select
                                    class="form__select"
                                    disabled=is_edit
                                    on:change={
                                        let vm = vm.clone();
                                        move |ev| {
                                            vm.form.update(|f| f.parent_id = event_target_value(&ev));
                                        }
                                    }
                                >
                                    <option
                                        value=""
                                        selected={
                                            let vm = vm.clone();
                                            move || vm.form.get().parent_id.is_empty()
                                        }
                                    >
                                        "Asosiy (Root)"
                                    </option>
                                    <For
                                        each={
                                            let exclude = edit_id.clone();
                                            move || {
                                                let exclude = exclude.clone();
                                                categories
                                                    .get()
                                                    .into_iter()
                                                    .filter(move |c| Some(&c.id) != exclude.as_ref())
                                                    .collect::<Vec<_>>()
                                            }
                                        }
                                        key=|c| c.id.clone()
                                        children={
                                            let vm = vm.clone();
                                            move |c: Category| {
                                                let option_id = c.id.clone();
                                                let vm = vm.clone();
                                                view! {
                                                    <option
                                                        value=c.id.clone()
                                                        selected=move || vm.form.get().parent_id == option_id
                                                    >
                                                        {c.name_uz}
                                                    </option>
                                                }
                                            }
                                        }
                                    />
                                </select>
                                <span class="form__select-chevron">{icon("chevron-down")}</span>
                            </div>
                        </div>
                    </div>
                </form>

                <div class="modal__footer">
                    <button
                        type="button"
                        class="btn btn--ghost modal__cancel"
                        disabled=move || saving.get()
                        on:click=move |_| on_close.run(())
                    >
                        "BEKOR QILISH"
                    </button>
                    <button
                        type="button"
                        class="btn btn--primary modal__submit"
                        disabled={
                            let vm = vm.clone();
                            move || saving.get() || !vm.is_form_valid()
                        }
                        on:click=move |_| submit()
                    >
                        {move || if saving.get() {
                            view! { <span class="spinner" aria-hidden="true"></span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }}
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
