use contracts::domain::a001_category::Category;
use leptos::prelude::*;

use crate::domain::a001_category::ui::card::CategoryCard;
use crate::shared::icons::icon;
use crate::shared::list_utils::{derive_visible, SearchInput, Searchable};

impl Searchable for Category {
    // The Cyrillic variant is not part of the search surface.
    fn matches_filter(&self, filter: &str) -> bool {
        let query = filter.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(&query))
        };

        self.name_uz.to_lowercase().contains(&query)
            || contains(&self.name_ru)
            || contains(&self.name_en)
    }
}

/// The only projection the grid renders: filtered by the query, sorted
/// ascending by order index.
pub fn visible_categories(items: &[Category], query: &str) -> Vec<Category> {
    derive_visible(items, query, |category| category.order_index)
}

/// Search toolbar, counters and the category grid.
#[component]
pub fn CategoryList(
    /// Canonical collection as last fetched.
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    /// Projection of the canonical collection for the current query.
    #[prop(into)]
    visible: Signal<Vec<Category>>,
    #[prop(into)] search_query: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_create: Callback<()>,
    #[prop(into)] on_edit: Callback<Category>,
    #[prop(into)] on_delete: Callback<Category>,
) -> impl IntoView {
    view! {
        <section class="list">
            <div class="list__toolbar">
                <SearchInput
                    value=search_query
                    on_change=on_search
                    placeholder="Kategoriyalarni qidirish..."
                />
                <div class="list__stats">
                    <div class="list__stat list__stat--total">
                        <p class="list__stat-label">"Jami"</p>
                        <p class="list__stat-value">{move || categories.get().len()}</p>
                    </div>
                    <div class="list__stat list__stat--visible">
                        <p class="list__stat-label">"Natija"</p>
                        <p class="list__stat-value">{move || visible.get().len()}</p>
                    </div>
                </div>
            </div>

            {move || {
                let items = visible.get();
                if items.is_empty() {
                    view! {
                        <div class="list__empty">
                            <div class="list__empty-icon">{icon("folder-open")}</div>
                            <h3 class="list__empty-title">"Hali kategoriyalar yo'q"</h3>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="list__grid">
                            {items
                                .into_iter()
                                .enumerate()
                                .map(|(index, category)| {
                                    view! {
                                        <CategoryCard
                                            category=category
                                            index=index
                                            on_edit=on_edit
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="list__fab">
                <button class="list__fab-button" on:click=move |_| on_create.run(())>
                    <span class="list__fab-icon">{icon("plus")}</span>
                    <span class="list__fab-label">"Yangi Kategoriya"</span>
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryStatus;

    fn category(id: &str, name_uz: &str, order_index: i32) -> Category {
        Category {
            id: id.to_string(),
            name_uz: name_uz.to_string(),
            name_uz_cyrillic: None,
            name_ru: None,
            name_en: None,
            order_index,
            status: CategoryStatus::Open,
            chat_id: "X".to_string(),
            parent_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_query_yields_all_in_order_index_order() {
        let items = vec![category("1", "Oziq-ovqat", 2), category("2", "Kiyim", 1)];
        let visible = visible_categories(&items, "");
        let names: Vec<&str> = visible.iter().map(|c| c.name_uz.as_str()).collect();
        assert_eq!(names, vec!["Kiyim", "Oziq-ovqat"]);
    }

    #[test]
    fn test_query_matches_any_of_three_names() {
        let mut with_ru = category("1", "Kiyim", 1);
        with_ru.name_ru = Some("Одежда".to_string());
        let mut with_en = category("2", "Texnika", 2);
        with_en.name_en = Some("Electronics".to_string());
        let plain = category("3", "Oziq-ovqat", 3);

        let items = vec![with_ru, with_en, plain];

        assert_eq!(visible_categories(&items, "одежда").len(), 1);
        assert_eq!(visible_categories(&items, "ELECTRON").len(), 1);
        assert_eq!(visible_categories(&items, "oziq").len(), 1);
        assert_eq!(visible_categories(&items, "mavjud emas").len(), 0);
    }

    #[test]
    fn test_absent_optional_names_never_match() {
        let items = vec![category("1", "Kiyim", 1)];
        assert!(visible_categories(&items, "одежда").is_empty());
    }

    #[test]
    fn test_cyrillic_variant_is_not_searched() {
        let mut item = category("1", "Kiyim", 1);
        item.name_uz_cyrillic = Some("Кийим".to_string());
        let items = vec![item];
        assert!(visible_categories(&items, "Кийим").is_empty());
    }

    #[test]
    fn test_equal_order_indices_keep_server_order() {
        let items = vec![
            category("a", "Birinchi", 5),
            category("b", "Ikkinchi", 5),
            category("c", "Uchinchi", 5),
        ];
        let visible = visible_categories(&items, "");
        let ids: Vec<&str> = visible.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
