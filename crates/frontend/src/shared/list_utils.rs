//! List projections shared by the domain views (search, visible-list derivation).

use leptos::prelude::*;

/// Trait for types that can be matched against the toolbar search query.
pub trait Searchable {
    /// Checks whether the item matches the search query.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Filters a list by the search query. An empty query keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Derives the visible list from the canonical one: filter by query, then
/// sort ascending by the given key. `sort_by_key` is stable, so items with
/// equal keys keep the relative order the server returned them in. The
/// source slice is never mutated.
pub fn derive_visible<T, K, F>(items: &[T], filter: &str, sort_key: F) -> Vec<T>
where
    T: Searchable + Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut visible = filter_list(items, filter);
    visible.sort_by_key(|item| sort_key(item));
    visible
}

/// Search input bound to the list filter, with a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired on every keystroke
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Qidirish...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| {
        on_change.run(String::new());
    };

    view! {
        <div class="search-box">
            <span class="search-box__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-box__input"
                placeholder={placeholder}
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button class="search-box__clear" on:click=clear_filter title="Tozalash">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Row {
        label: String,
        rank: i32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.label.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    fn row(label: &str, rank: i32) -> Row {
        Row {
            label: label.to_string(),
            rank,
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let rows = vec![row("a", 2), row("b", 1)];
        assert_eq!(filter_list(&rows, "").len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![row("Kiyim", 1), row("Texnika", 2)];
        let found = filter_list(&rows, "kiy");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label, "Kiyim");
    }

    #[test]
    fn test_derive_visible_sorts_ascending() {
        let rows = vec![row("b", 5), row("a", 1), row("c", 3)];
        let visible = derive_visible(&rows, "", |r| r.rank);
        let labels: Vec<&str> = visible.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_derive_visible_is_stable_on_ties() {
        let rows = vec![row("first", 1), row("second", 1), row("third", 1)];
        let visible = derive_visible(&rows, "", |r| r.rank);
        let labels: Vec<&str> = visible.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_derive_visible_filters_then_sorts() {
        let rows = vec![row("beta", 9), row("alpha", 2), row("betamax", 1)];
        let visible = derive_visible(&rows, "beta", |r| r.rank);
        let labels: Vec<&str> = visible.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["betamax", "beta"]);
    }
}
