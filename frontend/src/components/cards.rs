use yew::prelude::*;

use crate::models::{
    Award, CategoryShowcase, Competition, HowItWorksStep, StatisticDisplay, Talent, Testimonial,
    Workshop,
};
use crate::showcase::{deadline_phrase, format_stat_value};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: StatisticDisplay,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let stat = &props.stat;
    html! {
        <div class={classes!("stat-card", stat.color_class)}>
            <span class="stat-icon">{stat.icon}</span>
            <span class="stat-value">{format_stat_value(stat.value)}</span>
            <span class="stat-title">{stat.title}</span>
        </div>
    }
}

#[function_component(StatCardSkeleton)]
pub fn stat_card_skeleton() -> Html {
    html! {
        <div class="stat-card stat-card--skeleton">
            <span class="skeleton-circle"></span>
            <span class="skeleton-line skeleton-line--wide"></span>
            <span class="skeleton-line"></span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryCardProps {
    pub category: CategoryShowcase,
}

#[function_component(CategoryCard)]
pub fn category_card(props: &CategoryCardProps) -> Html {
    let category = &props.category;
    html! {
        <a class="category-card" href={category.link}>
            <img src={category.image_url} alt={category.name} loading="lazy" />
            <div class="category-card-body">
                <span class="category-icon">{category.icon}</span>
                <h3>{category.name}</h3>
                <p>{category.description}</p>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;
    let initial = testimonial.name.chars().next().unwrap_or('?').to_string();
    html! {
        <figure class="testimonial-card">
            <blockquote>{format!("“{}”", testimonial.quote)}</blockquote>
            <figcaption>
                {
                    match testimonial.avatar_url {
                        Some(url) => html! { <img class="testimonial-avatar" src={url} alt={testimonial.name} /> },
                        None => html! { <span class="testimonial-avatar testimonial-avatar--initial">{initial}</span> },
                    }
                }
                <div>
                    <strong>{testimonial.name}</strong>
                    <span class="testimonial-role">{testimonial.role}</span>
                </div>
            </figcaption>
        </figure>
    }
}

#[derive(Properties, PartialEq)]
pub struct HowItWorksCardProps {
    pub step: HowItWorksStep,
    pub number: usize,
}

#[function_component(HowItWorksCard)]
pub fn how_it_works_card(props: &HowItWorksCardProps) -> Html {
    html! {
        <div class="step-card">
            <span class="step-number">{props.number.to_string()}</span>
            <span class="step-icon">{props.step.icon}</span>
            <h3>{props.step.title}</h3>
            <p>{props.step.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AwardCardProps {
    pub award: Award,
}

#[function_component(AwardCard)]
pub fn award_card(props: &AwardCardProps) -> Html {
    html! {
        <div class="award-card">
            <span class="award-icon">{props.award.icon}</span>
            <h3>{props.award.title}</h3>
            <p>{props.award.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TalentCardProps {
    pub talent: Talent,
}

#[function_component(TalentCard)]
pub fn talent_card(props: &TalentCardProps) -> Html {
    let talent = &props.talent;
    let avatar = talent
        .avatar_url
        .clone()
        .unwrap_or_else(|| "/assets/avatar-placeholder.webp".to_string());
    let meta = match (talent.age, talent.location.as_deref()) {
        (Some(age), Some(location)) => format!("{}, {}", age, location),
        (Some(age), None) => age.to_string(),
        (None, Some(location)) => location.to_string(),
        (None, None) => String::new(),
    };

    html! {
        <div class="talent-card">
            <img class="talent-avatar" src={avatar} alt={talent.name.clone()} loading="lazy" />
            <h3>{talent.name.clone()}</h3>
            <span class="talent-category">{talent.category.clone()}</span>
            if !meta.is_empty() {
                <span class="talent-meta">{meta}</span>
            }
            if let Some(headline) = talent.headline.as_ref() {
                <p class="talent-headline">{headline.clone()}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkshopCardProps {
    pub workshop: Workshop,
}

#[function_component(WorkshopCard)]
pub fn workshop_card(props: &WorkshopCardProps) -> Html {
    let workshop = &props.workshop;
    html! {
        <div class="workshop-card">
            if let Some(image) = workshop.image_url.as_ref() {
                <img src={image.clone()} alt={workshop.title.clone()} loading="lazy" />
            }
            <div class="workshop-card-body">
                <span class="workshop-date">{workshop.start_time.format("%B %d, %Y · %H:%M UTC").to_string()}</span>
                <h3>{workshop.title.clone()}</h3>
                if let Some(instructor) = workshop.instructor.as_ref() {
                    <span class="workshop-instructor">{format!("with {}", instructor)}</span>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompetitionSpotlightProps {
    pub competition: Competition,
}

#[function_component(CompetitionSpotlight)]
pub fn competition_spotlight(props: &CompetitionSpotlightProps) -> Html {
    let competition = &props.competition;
    let deadline = competition
        .deadline
        .map(|deadline| deadline_phrase(deadline, chrono::Utc::now()));

    html! {
        <div class="competition-spotlight">
            if let Some(image) = competition.image_url.as_ref() {
                <img src={image.clone()} alt={competition.title.clone()} loading="lazy" />
            }
            <div class="competition-spotlight-body">
                <span class={classes!("status-badge", format!("status-{}", competition.status.label().to_lowercase()))}>
                    {competition.status.label()}
                </span>
                <h3>{competition.title.clone()}</h3>
                if let Some(description) = competition.description.as_ref() {
                    <p>{description.clone()}</p>
                }
                if let Some(prize) = competition.prize.as_ref() {
                    <span class="competition-prize">{format!("Prize: {}", prize)}</span>
                }
                if let Some(deadline) = deadline {
                    <span class="competition-deadline">{deadline}</span>
                }
            </div>
        </div>
    }
}
