use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::TalentQuery;
use crate::Route;

/// Hands the trimmed search text to `navigate`. Blank input is ignored.
pub fn submit_search(input: &str, navigate: impl FnOnce(TalentQuery)) -> bool {
    let search = input.trim();
    if search.is_empty() {
        return false;
    }
    navigate(TalentQuery {
        search: search.to_string(),
    });
    true
}

/// Talents listing URL for `query`, as written to the log on submit.
fn talents_href(query: &TalentQuery) -> String {
    if query.search.is_empty() {
        "/talents".to_string()
    } else {
        format!("/talents?search={}", urlencoding::encode(&query.search))
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    #[prop_or(AttrValue::from("Search talents, e.g. piano"))]
    pub placeholder: AttrValue,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let input_ref = use_node_ref();
    let navigator = use_navigator();

    let onsubmit = {
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(navigator) = navigator.clone() else {
                warn!("Search submitted outside of a router");
                return;
            };
            submit_search(&input.value(), |query| {
                info!("Searching talents for {}", talents_href(&query));
                if let Err(e) = navigator.push_with_query(&Route::Talents, &query) {
                    warn!("Failed to navigate to talents search: {:?}", e);
                }
            });
        })
    };

    html! {
        <form class="search-bar" {onsubmit}>
            <input ref={input_ref} type="search" placeholder={props.placeholder.clone()} aria-label="Search talents" />
            <button type="submit" class="search-button">{"Search"}</button>
            <style>
                {r#"
                .search-bar {
                    display: flex;
                    gap: 0.5rem;
                    max-width: 560px;
                    margin: -2rem auto 0;
                    position: relative;
                    z-index: 3;
                    background: rgba(26, 26, 26, 0.9);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 999px;
                    padding: 0.4rem;
                }
                .search-bar input {
                    flex: 1;
                    background: transparent;
                    border: none;
                    color: #fff;
                    font-size: 1rem;
                    padding: 0.6rem 1rem;
                    outline: none;
                }
                .search-button {
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.6rem 1.4rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_does_not_navigate() {
        let mut calls = 0;
        assert!(!submit_search("  ", |_| calls += 1));
        assert!(!submit_search("", |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn trimmed_input_navigates_once() {
        let mut seen = Vec::new();
        assert!(submit_search("  piano ", |query| seen.push(query)));
        assert_eq!(seen, vec![TalentQuery { search: "piano".into() }]);
        assert_eq!(talents_href(&seen[0]), "/talents?search=piano");
    }

    #[test]
    fn href_encodes_search_text() {
        let query = TalentQuery { search: "hip hop & soul".into() };
        assert_eq!(talents_href(&query), "/talents?search=hip%20hop%20%26%20soul");
        assert_eq!(talents_href(&TalentQuery::default()), "/talents");
    }
}
