use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of a category, assigned and owned by the server.
///
/// The client never changes a status directly; a delete is a server-side
/// soft-delete observed through the next list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryStatus {
    Open,
    Deleted,
    Archived,
}

/// Display descriptor for one status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    /// Localized badge label.
    pub label: &'static str,
    /// CSS modifier suffix for the badge.
    pub css: &'static str,
    /// Icon name understood by `icons::icon`.
    pub icon: &'static str,
}

impl CategoryStatus {
    /// Total mapping from status to its display descriptor.
    ///
    /// Deliberately an exhaustive match, so adding a status without a badge
    /// becomes a compile error instead of a silent fallback.
    pub fn display(&self) -> StatusDisplay {
        match self {
            CategoryStatus::Open => StatusDisplay {
                label: "Faol",
                css: "open",
                icon: "check-circle",
            },
            CategoryStatus::Deleted => StatusDisplay {
                label: "O'chirilgan",
                css: "deleted",
                icon: "trash",
            },
            CategoryStatus::Archived => StatusDisplay {
                label: "Arxiv",
                css: "archived",
                icon: "archive",
            },
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One taxonomy node as the remote API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Opaque identifier, assigned by the server, immutable after creation.
    pub id: String,
    /// Primary display name (Uzbek Latin), always present and non-blank.
    pub name_uz: String,
    pub name_uz_cyrillic: Option<String>,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    /// Display order among siblings; not guaranteed unique.
    pub order_index: i32,
    pub status: CategoryStatus,
    /// Owning chat session, set once at creation time.
    pub chat_id: String,
    /// Single-level parent reference; absent or empty means top-level.
    pub parent_id: Option<String>,
    /// Creation timestamp, display-only.
    pub created_at: Option<String>,
}

impl Category {
    /// True when this category is nested under another one.
    ///
    /// The server may send the parent reference as absent or as an empty
    /// string; both mean top-level.
    pub fn has_parent(&self) -> bool {
        self.parent_id.as_deref().is_some_and(|p| !p.is_empty())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Transient draft of one category's editable fields, as typed in the form.
///
/// Every field is raw input text; nothing is validated or coerced until a
/// wire DTO is built from it. `parent_id == ""` means top-level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub order_index: String,
    pub parent_id: String,
    pub chat_id: String,
}

impl CategoryDraft {
    /// Blank draft for create mode, bound to the active chat session.
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self {
            order_index: "0".to_string(),
            chat_id: chat_id.into(),
            ..Self::default()
        }
    }

    /// Draft seeded from an existing category for edit mode.
    ///
    /// Missing optional names become empty strings so every input renders
    /// with a defined value.
    pub fn from_category(category: &Category) -> Self {
        Self {
            name_uz: category.name_uz.clone(),
            name_uz_cyrillic: category.name_uz_cyrillic.clone().unwrap_or_default(),
            name_ru: category.name_ru.clone().unwrap_or_default(),
            name_en: category.name_en.clone().unwrap_or_default(),
            order_index: category.order_index.to_string(),
            parent_id: category.parent_id.clone().unwrap_or_default(),
            chat_id: category.chat_id.clone(),
        }
    }

    /// Whatever was typed for the order index, as a finite integer.
    fn coerced_order_index(&self) -> i32 {
        self.order_index.trim().parse().unwrap_or(0)
    }

    /// Wire payload for the add-category operation.
    ///
    /// A blank parent becomes JSON `null`, never an empty string. Empty name
    /// variants are kept as empty strings, not omitted.
    pub fn to_create_dto(&self) -> CreateCategoryDto {
        CreateCategoryDto {
            name_uz: self.name_uz.clone(),
            name_uz_cyrillic: self.name_uz_cyrillic.clone(),
            name_ru: self.name_ru.clone(),
            name_en: self.name_en.clone(),
            order_index: self.coerced_order_index(),
            chat_id: self.chat_id.clone(),
            parent_id: if self.parent_id.is_empty() {
                None
            } else {
                Some(self.parent_id.clone())
            },
        }
    }

    /// Wire payload for the edit-category operation.
    ///
    /// Parent and chat references are immutable after creation; the type has
    /// no fields for them, so they cannot leak into an edit payload.
    pub fn to_update_dto(&self) -> UpdateCategoryDto {
        UpdateCategoryDto {
            name_uz: self.name_uz.clone(),
            name_uz_cyrillic: self.name_uz_cyrillic.clone(),
            name_ru: self.name_ru.clone(),
            name_en: self.name_en.clone(),
            order_index: self.coerced_order_index(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub order_index: i32,
    pub chat_id: String,
    /// `None` serializes as `null`; the contract requires the key.
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub order_index: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_category() -> Category {
        Category {
            id: "42".to_string(),
            name_uz: "Oziq-ovqat".to_string(),
            name_uz_cyrillic: Some("Озиқ-овқат".to_string()),
            name_ru: None,
            name_en: Some("Food".to_string()),
            order_index: 3,
            status: CategoryStatus::Open,
            chat_id: "chat-1".to_string(),
            parent_id: None,
            created_at: Some("2024-03-15T14:02:26Z".to_string()),
        }
    }

    #[test]
    fn test_status_wire_format_is_uppercase() {
        assert_eq!(
            serde_json::to_string(&CategoryStatus::Open).unwrap(),
            "\"OPEN\""
        );
        let parsed: CategoryStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(parsed, CategoryStatus::Archived);
    }

    #[test]
    fn test_status_display_covers_every_variant() {
        assert_eq!(CategoryStatus::Open.display().label, "Faol");
        assert_eq!(CategoryStatus::Deleted.display().label, "O'chirilgan");
        assert_eq!(CategoryStatus::Archived.display().label, "Arxiv");
    }

    #[test]
    fn test_category_deserializes_from_wire_json() {
        let json = r#"{"id":"1","nameUz":"Kiyim","orderIndex":1,"status":"OPEN","chatId":"X"}"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.name_uz, "Kiyim");
        assert_eq!(c.order_index, 1);
        assert_eq!(c.status, CategoryStatus::Open);
        assert_eq!(c.name_ru, None);
        assert_eq!(c.parent_id, None);
    }

    #[test]
    fn test_empty_string_parent_counts_as_top_level() {
        let mut c = sample_category();
        assert!(!c.has_parent());
        c.parent_id = Some(String::new());
        assert!(!c.has_parent());
        c.parent_id = Some("7".to_string());
        assert!(c.has_parent());
    }

    #[test]
    fn test_draft_seeded_from_category_defaults_missing_names_to_empty() {
        let draft = CategoryDraft::from_category(&sample_category());
        assert_eq!(draft.name_uz, "Oziq-ovqat");
        assert_eq!(draft.name_ru, "");
        assert_eq!(draft.name_en, "Food");
        assert_eq!(draft.order_index, "3");
        assert_eq!(draft.parent_id, "");
        assert_eq!(draft.chat_id, "chat-1");
    }

    #[test]
    fn test_order_index_coercion_defaults_to_zero() {
        let mut draft = CategoryDraft::new("c");
        for (typed, expected) in [("", 0), ("abc", 0), ("1.5", 0), (" 7 ", 7), ("-2", -2)] {
            draft.order_index = typed.to_string();
            assert_eq!(draft.to_create_dto().order_index, expected, "typed {typed:?}");
            assert_eq!(draft.to_update_dto().order_index, expected, "typed {typed:?}");
        }
    }

    #[test]
    fn test_create_dto_sends_null_parent_when_blank() {
        let mut draft = CategoryDraft::new("chat-9");
        draft.name_uz = "Test".to_string();
        let value = serde_json::to_value(draft.to_create_dto()).unwrap();
        assert!(value["parentId"].is_null());
        // empty optional names stay in the object as empty strings
        assert_eq!(value["nameUzCyrillic"], "");
        assert_eq!(value["nameRu"], "");
        assert_eq!(value["nameEn"], "");
        assert_eq!(value["chatId"], "chat-9");

        draft.parent_id = "55".to_string();
        let value = serde_json::to_value(draft.to_create_dto()).unwrap();
        assert_eq!(value["parentId"], "55");
    }

    #[test]
    fn test_update_dto_never_carries_parent_or_chat() {
        let mut draft = CategoryDraft::from_category(&sample_category());
        draft.parent_id = "99".to_string();
        draft.chat_id = "still-set".to_string();
        let value = serde_json::to_value(draft.to_update_dto()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("parentId"));
        assert!(!object.contains_key("chatId"));
        assert_eq!(
            object.keys().len(),
            5,
            "only the four names and the order index go out on edit"
        );
    }
}
