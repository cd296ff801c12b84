use contracts::domain::a001_category::{Category, CategoryDraft};
use leptos::prelude::*;

use crate::shared::llm;

/// ViewModel for the category form.
///
/// Owns the draft and the translation-assist state. Saving is not handled
/// here; the form hands a draft snapshot to the controller and the
/// controller talks to the gateway.
#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDraft>,
    pub ai_loading: RwSignal<bool>,
    edit_id: Option<String>,
}

impl CategoryDetailsViewModel {
    /// Create mode gets a blank draft bound to the session; edit mode gets a
    /// draft seeded from the category with missing optionals as empty
    /// strings.
    pub fn new(editing: Option<&Category>, chat_id: &str) -> Self {
        let form = match editing {
            Some(category) => CategoryDraft::from_category(category),
            None => CategoryDraft::new(chat_id),
        };

        Self {
            form: RwSignal::new(form),
            ai_loading: RwSignal::new(false),
            edit_id: editing.map(|category| category.id.clone()),
        }
    }

    /// Fixed for the lifetime of one modal invocation.
    pub fn is_edit_mode(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn edit_id(&self) -> Option<&str> {
        self.edit_id.as_deref()
    }

    /// The primary name is the only client-enforced requirement.
    pub fn is_form_valid(&self) -> bool {
        !self.form.get().name_uz.trim().is_empty()
    }

    /// True while a translation request is in flight or the primary name
    /// is still empty.
    pub fn autofill_blocked(&self) -> bool {
        self.ai_loading.get() || self.form.get().name_uz.is_empty()
    }

    /// Asks the translation gateway to fill the other name fields from the
    /// first non-empty of the Latin, Russian or English names.
    ///
    /// Failures are logged and swallowed; the draft is left untouched and
    /// the user sees nothing.
    pub fn autofill_command(&self) {
        if self.ai_loading.get_untracked() {
            return;
        }

        let source = {
            let form = self.form.get_untracked();
            if !form.name_uz.is_empty() {
                form.name_uz
            } else if !form.name_ru.is_empty() {
                form.name_ru
            } else {
                form.name_en
            }
        };
        if source.is_empty() {
            return;
        }

        let form = self.form;
        let ai_loading = self.ai_loading;
        ai_loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            match llm::suggest_translations(&source).await {
                Ok(suggestion) => {
                    // The modal may be gone by the time the reply lands.
                    form.try_update(|draft| suggestion.merge_into(draft));
                }
                Err(e) => log::error!("translation assist failed: {}", e),
            }
            ai_loading.try_set(false);
        });
    }
}
