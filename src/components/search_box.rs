//! Search Box Component
//!
//! Holds the typed draft locally. The draft is committed on Enter or the
//! search button; emptying it clears the active search right away.

use leptos::prelude::*;

#[component]
pub fn SearchBox(
    on_submit: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let submit = move || on_submit.run(draft.get_untracked());

    // Emptying the draft (typing or the native clear button) drops the search
    let update_draft = move |value: String| {
        let clear = clears_search(&draft.get_untracked(), &value);
        set_draft.set(value);
        if clear {
            on_clear.run(());
        }
    };

    view! {
        <div class="single-search">
            <input
                type="search"
                class="single-search-input"
                name="singleResearch"
                placeholder="Type here"
                prop:value=move || draft.get()
                on:input=move |ev| update_draft(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button class="single-button-search" on:click=move |_| submit()>
                "search"
            </button>
        </div>
    }
}

/// A draft edit drops the active search only when it empties a non-empty draft
pub fn clears_search(prev: &str, next: &str) -> bool {
    next.is_empty() && !prev.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptying_draft_clears_search() {
        assert!(clears_search("latte", ""));
    }

    #[test]
    fn test_empty_to_empty_does_not_clear() {
        assert!(!clears_search("", ""));
    }

    #[test]
    fn test_editing_draft_does_not_clear() {
        assert!(!clears_search("latt", "latte"));
        assert!(!clears_search("", "l"));
    }
}
