use yew::prelude::*;

use crate::components::cards::CompetitionSpotlight;
use crate::hooks::use_competitions;
use crate::pages::welcome::WELCOME_CSS;

#[function_component(Competitions)]
pub fn competitions() -> Html {
    let competitions = use_competitions();

    html! {
        <div class="welcome-page listing-page">
            <section class="welcome-section">
                <h1 class="section-title">{"Competitions"}</h1>
                if competitions.loading {
                    <p class="listing-empty">{"Loading competitions..."}</p>
                } else if competitions.is_empty() {
                    <p class="listing-empty">{"No competitions right now. Check back soon."}</p>
                } else {
                    <div class="competition-list">
                        { for competitions.items.iter().map(|competition| html! {
                            <CompetitionSpotlight key={competition.id} competition={competition.clone()} />
                        }) }
                    </div>
                }
            </section>
            <style>{WELCOME_CSS}</style>
            <style>
                {r#"
                .listing-page { padding-top: 74px; }
                .listing-empty { text-align: center; color: #999; }
                .competition-list {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
