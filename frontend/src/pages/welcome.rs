use yew::prelude::*;
use yew_router::components::Link;

use crate::auth::is_logged_in;
use crate::components::cards::{
    AwardCard, CategoryCard, CompetitionSpotlight, HowItWorksCard, StatCard, StatCardSkeleton,
    TalentCard, TestimonialCard, WorkshopCard,
};
use crate::components::carousel::Carousel;
use crate::components::reveal_on_scroll::RevealOnScroll;
use crate::components::search_bar::SearchBar;
use crate::components::stagger_text::StaggerText;
use crate::content::{AWARDS, CATEGORIES, HERO_SLIDES, HOW_IT_WORKS, STAT_TILES, TESTIMONIALS};
use crate::hooks::{use_competitions, use_resources, use_talents, use_users, use_workshops};
use crate::models::RevealMode;
use crate::showcase::{
    active_competition_count, featured_competition, future_workshops, show_stat_skeleton,
    showcased_talents, statistics, upcoming_workshops, StatSources,
};
use crate::Route;

#[function_component(Welcome)]
pub fn welcome() -> Html {
    let logged_in = is_logged_in();
    let talents = use_talents();
    let competitions = use_competitions();
    let workshops = use_workshops();
    let resources = use_resources();
    let users = use_users();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let now = chrono::Utc::now();
    let featured = featured_competition(&competitions.items).cloned();
    let upcoming = upcoming_workshops(&workshops.items, now);

    let any_loading = users.loading
        || talents.loading
        || competitions.loading
        || workshops.loading
        || resources.loading;
    let stats = statistics(
        STAT_TILES,
        &StatSources {
            users: users.len(),
            talents: talents.len(),
            categories: 0,
            competitions: active_competition_count(&competitions.items),
            workshops: future_workshops(&workshops.items, now).len(),
            resources: resources.len(),
        }
        .with_categories(CATEGORIES.len(), any_loading),
    );
    let stats_skeleton = show_stat_skeleton(any_loading, &stats);

    html! {
        <div class="welcome-page">
            <section class="welcome-hero">
                <Carousel slides={HERO_SLIDES} />
            </section>
            <SearchBar />

            <RevealOnScroll class="welcome-section">
                <div class="stat-grid">
                    if stats_skeleton {
                        { for STAT_TILES.iter().map(|tile| html! { <StatCardSkeleton key={tile.id} /> }) }
                    } else {
                        { for stats.into_iter().map(|stat| {
                            let id = stat.id;
                            html! { <StatCard key={id} {stat} /> }
                        }) }
                    }
                </div>
            </RevealOnScroll>

            if !CATEGORIES.is_empty() {
                <RevealOnScroll class="welcome-section">
                    <h2 class="section-title">
                        <StaggerText text="Find your stage" mode={RevealMode::Word} />
                    </h2>
                    <div class="category-grid">
                        { for CATEGORIES.iter().map(|category| html! {
                            <CategoryCard key={category.id} category={category.clone()} />
                        }) }
                    </div>
                </RevealOnScroll>
            }

            if !talents.is_empty() {
                <RevealOnScroll class="welcome-section">
                    <h2 class="section-title">{"Talent on the rise"}</h2>
                    <div class="talent-grid">
                        { for showcased_talents(&talents.items).iter().map(|talent| html! {
                            <TalentCard key={talent.id} talent={talent.clone()} />
                        }) }
                    </div>
                    <div class="section-more">
                        <Link<Route> to={Route::Talents} classes="text-link">{"Browse all talents →"}</Link<Route>>
                    </div>
                </RevealOnScroll>
            }

            if let Some(competition) = featured {
                <RevealOnScroll class="welcome-section">
                    <h2 class="section-title">{"Featured competition"}</h2>
                    <CompetitionSpotlight {competition} />
                    <div class="section-more">
                        <Link<Route> to={Route::Competitions} classes="text-link">{"All competitions →"}</Link<Route>>
                    </div>
                </RevealOnScroll>
            }

            if !upcoming.is_empty() {
                <RevealOnScroll class="welcome-section">
                    <h2 class="section-title">{"Upcoming workshops"}</h2>
                    <div class="workshop-grid">
                        { for upcoming.into_iter().map(|workshop| {
                            let id = workshop.id;
                            html! { <WorkshopCard key={id} {workshop} /> }
                        }) }
                    </div>
                    <div class="section-more">
                        <Link<Route> to={Route::Workshops} classes="text-link">{"See the full schedule →"}</Link<Route>>
                    </div>
                </RevealOnScroll>
            }

            if !AWARDS.is_empty() {
                <RevealOnScroll class="welcome-section">
                    <h2 class="section-title">{"Awards we hand out"}</h2>
                    <div class="award-grid">
                        { for AWARDS.iter().map(|award| html! {
                            <AwardCard key={award.id} award={award.clone()} />
                        }) }
                    </div>
                </RevealOnScroll>
            }

            <section class="welcome-section">
                <h2 class="section-title">{"How it works"}</h2>
                <div class="step-grid">
                    { for HOW_IT_WORKS.iter().enumerate().map(|(i, step)| html! {
                        <RevealOnScroll key={i} delay_ms={i as u32 * 150}>
                            <HowItWorksCard step={step.clone()} number={i + 1} />
                        </RevealOnScroll>
                    }) }
                </div>
            </section>

            if !TESTIMONIALS.is_empty() {
                <RevealOnScroll class="welcome-section">
                    <h2 class="section-title">{"What families say"}</h2>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|testimonial| html! {
                            <TestimonialCard key={testimonial.id} testimonial={testimonial.clone()} />
                        }) }
                    </div>
                </RevealOnScroll>
            }

            <RevealOnScroll class="welcome-cta">
                <h2>{"Ready to be seen?"}</h2>
                if logged_in {
                    <Link<Route> to={Route::Talents} classes="cta-button">
                        <span>{"Explore talents"}</span>
                        <i class="arrow">{"→"}</i>
                    </Link<Route>>
                } else {
                    <Link<Route> to={Route::Register} classes="cta-button">
                        <span>{"Join for free"}</span>
                        <i class="arrow">{"→"}</i>
                    </Link<Route>>
                }
            </RevealOnScroll>

            <style>{WELCOME_CSS}</style>
        </div>
    }
}

pub const WELCOME_CSS: &str = r#"
.welcome-page {
    min-height: 100vh;
    background: #1a1a1a;
    color: #ffffff;
    overflow-x: hidden;
}
.welcome-section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 4rem 2rem;
}
.section-title {
    font-size: 2.4rem;
    margin-bottom: 2rem;
    text-align: center;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.section-more {
    text-align: center;
    margin-top: 2rem;
}
.text-link {
    color: #7EB2FF;
    text-decoration: none;
}
.stat-grid,
.category-grid,
.talent-grid,
.workshop-grid,
.award-grid,
.step-grid,
.testimonial-grid {
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
}
.talent-grid {
    grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
}
.stat-card,
.category-card,
.talent-card,
.workshop-card,
.award-card,
.step-card,
.testimonial-card,
.competition-spotlight {
    background: rgba(30, 30, 30, 0.7);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 12px;
    padding: 1.5rem;
    transition: all 0.3s ease;
    color: inherit;
    text-decoration: none;
}
.category-card:hover,
.talent-card:hover,
.workshop-card:hover {
    border-color: rgba(30, 144, 255, 0.3);
    transform: translateY(-5px);
}
.stat-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.4rem;
}
.stat-icon { font-size: 2rem; }
.stat-value { font-size: 2.2rem; font-weight: 700; }
.stat-title { color: #999; }
.stat-blue .stat-value { color: #7EB2FF; }
.stat-gold .stat-value { color: #FFD166; }
.stat-pink .stat-value { color: #FF8FAB; }
.stat-green .stat-value { color: #6BE39B; }
.stat-purple .stat-value { color: #B69CFF; }
.stat-teal .stat-value { color: #5ED3D1; }
.stat-card--skeleton .skeleton-circle,
.stat-card--skeleton .skeleton-line {
    display: block;
    background: linear-gradient(90deg, #2a2a2a, #3a3a3a, #2a2a2a);
    background-size: 200% 100%;
    animation: skeletonShimmer 1.2s linear infinite;
    border-radius: 6px;
}
.skeleton-circle { width: 2.5rem; height: 2.5rem; border-radius: 50% !important; }
.skeleton-line { width: 50%; height: 0.9rem; }
.skeleton-line--wide { width: 70%; height: 1.8rem; }
@keyframes skeletonShimmer {
    from { background-position: 200% 0; }
    to { background-position: -200% 0; }
}
.category-card img,
.workshop-card img,
.competition-spotlight img {
    width: 100%;
    border-radius: 8px;
    object-fit: cover;
    aspect-ratio: 16 / 9;
}
.category-icon,
.award-icon,
.step-icon { font-size: 1.8rem; }
.talent-card { text-align: center; }
.talent-avatar {
    width: 96px;
    height: 96px;
    border-radius: 50%;
    object-fit: cover;
}
.talent-category {
    display: block;
    color: #7EB2FF;
    font-size: 0.9rem;
}
.talent-meta,
.workshop-date,
.workshop-instructor,
.competition-deadline {
    display: block;
    color: #999;
    font-size: 0.85rem;
}
.competition-spotlight {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    align-items: center;
}
.status-badge {
    display: inline-block;
    padding: 0.2rem 0.8rem;
    border-radius: 999px;
    font-size: 0.8rem;
    background: rgba(30, 144, 255, 0.2);
}
.status-open { background: rgba(107, 227, 155, 0.25); }
.competition-prize {
    display: block;
    font-weight: 600;
    margin: 0.5rem 0;
}
.step-number {
    display: inline-flex;
    width: 2rem;
    height: 2rem;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: #1E90FF;
    margin-right: 0.6rem;
}
.testimonial-card blockquote {
    font-style: italic;
    margin: 0 0 1rem;
}
.testimonial-card figcaption {
    display: flex;
    align-items: center;
    gap: 0.8rem;
}
.testimonial-avatar {
    width: 48px;
    height: 48px;
    border-radius: 50%;
    object-fit: cover;
}
.testimonial-avatar--initial {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    background: #26324a;
}
.testimonial-role {
    display: block;
    color: #999;
    font-size: 0.85rem;
}
.welcome-cta {
    text-align: center;
    padding: 6rem 2rem;
}
.cta-button {
    display: inline-flex;
    align-items: center;
    gap: 0.6rem;
    padding: 1rem 2.2rem;
    border-radius: 999px;
    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
    color: #fff;
    text-decoration: none;
    font-weight: 600;
}
@media (max-width: 768px) {
    .section-title { font-size: 1.8rem; }
    .competition-spotlight { grid-template-columns: 1fr; }
    .welcome-section { padding: 3rem 1rem; }
}
"#;
