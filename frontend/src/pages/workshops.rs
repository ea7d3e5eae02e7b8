use yew::prelude::*;

use crate::components::cards::WorkshopCard;
use crate::hooks::use_workshops;
use crate::pages::welcome::WELCOME_CSS;
use crate::showcase::future_workshops;

#[function_component(Workshops)]
pub fn workshops() -> Html {
    let workshops = use_workshops();
    let upcoming = future_workshops(&workshops.items, chrono::Utc::now());

    html! {
        <div class="welcome-page listing-page">
            <section class="welcome-section">
                <h1 class="section-title">{"Upcoming workshops"}</h1>
                if workshops.loading {
                    <p class="listing-empty">{"Loading workshops..."}</p>
                } else if upcoming.is_empty() {
                    <p class="listing-empty">{"No workshops scheduled yet."}</p>
                } else {
                    <div class="workshop-grid">
                        { for upcoming.into_iter().map(|workshop| {
                            let id = workshop.id;
                            html! { <WorkshopCard key={id} {workshop} /> }
                        }) }
                    </div>
                }
            </section>
            <style>{WELCOME_CSS}</style>
            <style>
                {r#"
                .listing-page { padding-top: 74px; }
                .listing-empty { text-align: center; color: #999; }
                "#}
            </style>
        </div>
    }
}
