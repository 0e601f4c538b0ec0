//! Search box and match highlighting used by every record explorer
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and applying the query
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Byte ranges of `needle_lower` inside `text`, case-insensitive.
///
/// Texts whose lowercase form changes byte length (some non-ASCII
/// letters) are not split, so ranges always fall on char boundaries.
pub fn match_ranges(text: &str, needle_lower: &str) -> Vec<(usize, usize)> {
    if needle_lower.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(needle_lower) {
        let start = last_pos + pos;
        let end = start + needle_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Wrap every occurrence of the active query in `<mark>`.
///
/// `query` is the already-lowercased effective query; `None` renders the
/// text unchanged.
pub fn highlight_matches(text: &str, query: Option<&str>) -> AnyView {
    let ranges = query.map(|q| match_ranges(text, q)).unwrap_or_default();
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="table__highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Query currently applied to the table
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new query once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    // Follow external resets (Refresh, Clear filters)
    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() {
            input_value.set(String::new());
        }
    });

    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        // Dropping the previous Timeout cancels it
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Anna Hansen", "an"), vec![(0, 2), (6, 8)]);
        assert_eq!(match_ranges("Science", "sci"), vec![(0, 3)]);
    }

    #[test]
    fn test_match_ranges_no_query_or_no_match() {
        assert!(match_ranges("Mathematics", "").is_empty());
        assert!(match_ranges("Mathematics", "bio").is_empty());
    }

    #[test]
    fn test_match_ranges_non_overlapping() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }
}
