/// List helpers shared by the catalogue pages (search box, match highlighting)
use leptos::prelude::*;

pub use contracts::shared::search::{filter_list, Searchable};

use super::debounce::Debouncer;

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of non-overlapping case-insensitive matches of `filter` in `text`.
///
/// Compares char by char so ranges always fall on char boundaries of the
/// original text, whatever lowercasing does to byte lengths.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let mut matched = 0;
        let mut j = i;
        while j < chars.len() && matched < needle.len() {
            let lowered: Vec<char> = chars[j].1.to_lowercase().collect();
            if needle[matched..].starts_with(&lowered) {
                matched += lowered.len();
                j += 1;
            } else {
                break;
            }
        }
        if matched == needle.len() {
            let start = chars[i].0;
            let end = chars.get(j).map(|(pos, _)| *pos).unwrap_or(text.len());
            ranges.push((start, end));
            i = j;
        } else {
            i += 1;
        }
    }
    ranges
}

/// Search box with debounce and a clear button
///
/// `on_change` receives the raw text after `debounce_ms` of quiet. Clearing
/// the box reports the empty string immediately. When `value` (the committed
/// filter) is cleared from outside, the box empties too.
#[component]
pub fn SearchInput(
    /// Committed filter text
    #[prop(into)]
    value: Signal<String>,
    /// Callback for the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debouncer = Debouncer::new(debounce_ms);

    Effect::new(move |_| {
        if value.get().is_empty() && !input_value.get_untracked().is_empty() {
            debouncer.cancel();
            set_input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debouncer.call(move || on_change.run(new_value));
    };

    let clear_filter = move |_| {
        debouncer.cancel();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_ascii() {
        assert_eq!(match_ranges("Computer Science", "sci"), vec![(9, 12)]);
        assert_eq!(match_ranges("abcabc", "ABC"), vec![(0, 3), (3, 6)]);
    }

    #[test]
    fn test_match_ranges_cjk() {
        // each CJK char is three bytes
        assert_eq!(match_ranges("计算机科学与技术", "科学"), vec![(9, 15)]);
    }

    #[test]
    fn test_match_ranges_none() {
        assert!(match_ranges("Finance", "law").is_empty());
        assert!(match_ranges("Finance", "").is_empty());
    }
}
