use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::TalentCard;
use crate::components::search_bar::SearchBar;
use crate::hooks::use_talents;
use crate::models::{Talent, TalentQuery};
use crate::pages::welcome::WELCOME_CSS;

/// Case-insensitive match on name, category or location. Blank search keeps everything.
pub fn filter_talents<'a>(talents: &'a [Talent], search: &str) -> Vec<&'a Talent> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return talents.iter().collect();
    }
    talents
        .iter()
        .filter(|talent| {
            talent.name.to_lowercase().contains(&needle)
                || talent.category.to_lowercase().contains(&needle)
                || talent
                    .location
                    .as_deref()
                    .map_or(false, |location| location.to_lowercase().contains(&needle))
        })
        .collect()
}

#[function_component(Talents)]
pub fn talents() -> Html {
    let talents = use_talents();
    let search = use_location()
        .and_then(|location| location.query::<TalentQuery>().ok())
        .unwrap_or_default()
        .search;

    let matches = filter_talents(&talents.items, &search);
    let heading = if search.trim().is_empty() {
        "All talents".to_string()
    } else {
        format!("Talents matching \"{}\"", search.trim())
    };

    html! {
        <div class="welcome-page listing-page">
            <section class="welcome-section">
                <h1 class="section-title">{heading}</h1>
                <SearchBar />
            </section>
            <section class="welcome-section">
                if talents.loading {
                    <p class="listing-empty">{"Loading talents..."}</p>
                } else if matches.is_empty() {
                    <p class="listing-empty">{"No talents found. Try another search."}</p>
                } else {
                    <div class="talent-grid">
                        { for matches.into_iter().map(|talent| html! {
                            <TalentCard key={talent.id} talent={talent.clone()} />
                        }) }
                    </div>
                }
            </section>
            <style>{WELCOME_CSS}</style>
            <style>
                {r#"
                .listing-page {
                    padding-top: 74px;
                }
                .listing-page .search-bar {
                    margin: 0 auto;
                }
                .listing-empty {
                    text-align: center;
                    color: #999;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talent(id: i32, name: &str, category: &str, location: Option<&str>) -> Talent {
        Talent {
            id,
            name: name.into(),
            category: category.into(),
            age: Some(15),
            location: location.map(Into::into),
            avatar_url: None,
            headline: None,
        }
    }

    #[test]
    fn matches_name_category_and_location() {
        let talents = vec![
            talent(1, "Ana Piano", "Music", None),
            talent(2, "Ben", "piano", Some("Oslo")),
            talent(3, "Cleo", "Dance", Some("Pianosa")),
            talent(4, "Dev", "Sports", Some("Lisbon")),
        ];
        let ids: Vec<i32> = filter_talents(&talents, " PIANO ").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn blank_search_keeps_order_and_everything() {
        let talents = vec![talent(2, "Ben", "Music", None), talent(1, "Ana", "Dance", None)];
        let ids: Vec<i32> = filter_talents(&talents, "   ").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
