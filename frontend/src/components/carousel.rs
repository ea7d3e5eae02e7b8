use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::components::stagger_text::StaggerText;
use crate::components::typed_text::TypedText;
use crate::config;
use crate::models::{Slide, TitleAnimation};

/// Cursor over the hero slides.
///
/// `index` always stays below `len` (or is 0 for an empty carousel). Every
/// transition bumps `replay_key`, which nested animations use as their key so
/// they restart whenever the visible slide changes.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    replay_key: u64,
    autoplay_ms: u32,
}

pub enum CarouselAction {
    Next,
    Previous,
    JumpTo(usize),
    Reset { len: usize, autoplay_ms: u32 },
}

impl CarouselState {
    pub fn new(len: usize, autoplay_ms: u32) -> Self {
        Self {
            len,
            index: 0,
            replay_key: 0,
            autoplay_ms,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn replay_key(&self) -> u64 {
        self.replay_key
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.bump();
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.bump();
    }

    /// Returns false and leaves the cursor alone when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.bump();
        true
    }

    /// Prev/next buttons and dots only make sense with something to switch to.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// Delay before the next automatic advance, `None` when autoplay is off.
    pub fn autoplay_delay(&self) -> Option<u32> {
        (self.has_controls() && self.autoplay_ms > 0).then_some(self.autoplay_ms)
    }

    fn bump(&mut self) {
        self.replay_key = self.replay_key.wrapping_add(1);
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Previous => next.previous(),
            CarouselAction::JumpTo(index) => {
                if !next.jump_to(index) {
                    return self;
                }
            }
            CarouselAction::Reset { len, autoplay_ms } => {
                let replay_key = next.replay_key.wrapping_add(1);
                next = CarouselState::new(len, autoplay_ms);
                next.replay_key = replay_key;
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: &'static [Slide],
    #[prop_or(config::HERO_AUTOPLAY_MS)]
    pub autoplay_ms: u32,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let slides = props.slides;
    let state = use_reducer(|| CarouselState::new(slides.len(), props.autoplay_ms));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(len, autoplay_ms)| {
                if state.len() != *len || state.autoplay_ms != *autoplay_ms {
                    state.dispatch(CarouselAction::Reset { len: *len, autoplay_ms: *autoplay_ms });
                }
                || ()
            },
            (slides.len(), props.autoplay_ms),
        );
    }

    // One pending advance at most: any transition changes the replay key, which
    // drops (and so cancels) the previous timeout before a new one is armed.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(replay_key, delay)| {
                let timeout = delay.map(|ms| {
                    debug!("Hero autoplay armed for {}ms (transition {})", ms, replay_key);
                    Timeout::new(ms, move || dispatcher.dispatch(CarouselAction::Next))
                });
                move || drop(timeout)
            },
            (state.replay_key(), state.autoplay_delay()),
        );
    }

    if slides.is_empty() {
        return html! {
            <div class="hero-carousel hero-carousel--empty">
                <div class="hero-placeholder"></div>
                <style>{CAROUSEL_CSS}</style>
            </div>
        };
    }

    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    html! {
        <div class="hero-carousel">
            <style>{CAROUSEL_CSS}</style>
            {
                for slides.iter().enumerate().map(|(i, slide)| {
                    let active = i == state.index();
                    html! {
                        <div
                            key={slide.id}
                            class={classes!("hero-slide", active.then(|| "active"))}
                            aria-hidden={(!active).to_string()}
                        >
                            <img class="hero-slide-image" src={slide.image_url} alt={slide.title.unwrap_or("")} />
                            if active {
                                <div class="hero-slide-caption" key={state.replay_key()}>
                                    { render_title(slide) }
                                    { render_subtitle(slide) }
                                </div>
                            }
                        </div>
                    }
                })
            }
            if state.has_controls() {
                <>
                <button class="hero-nav hero-nav--prev" aria-label="Previous slide" onclick={on_previous}>{"‹"}</button>
                <button class="hero-nav hero-nav--next" aria-label="Next slide" onclick={on_next}>{"›"}</button>
                <div class="hero-dots">
                    {
                        for (0..slides.len()).map(|i| {
                            let active = i == state.index();
                            let state = state.clone();
                            let onclick = Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::JumpTo(i)));
                            html! {
                                <button
                                    class={classes!("hero-dot", active.then(|| "active"))}
                                    aria-label={format!("Go to slide {}", i + 1)}
                                    {onclick}
                                />
                            }
                        })
                    }
                </div>
                </>
            }
        </div>
    }
}

fn render_title(slide: &Slide) -> Html {
    let Some(title) = slide.title else {
        return html! {};
    };
    match slide.title_animation {
        Some(TitleAnimation::Typed) => html! {
            <h1 class="hero-title">
                <TypedText text={title} interval_ms={config::TITLE_TYPING_MS} />
            </h1>
        },
        Some(TitleAnimation::Staggered(mode)) => html! {
            <h1 class="hero-title">
                <StaggerText text={title} {mode} />
            </h1>
        },
        None => html! { <h1 class="hero-title">{title}</h1> },
    }
}

fn render_subtitle(slide: &Slide) -> Html {
    let Some(subtitle) = slide.subtitle else {
        return html! {};
    };
    match slide.subtitle_animation {
        Some(mode) => html! {
            <p class="hero-subtitle">
                <StaggerText text={subtitle} {mode} delay_offset_ms={400} />
            </p>
        },
        None => html! { <p class="hero-subtitle fade-in">{subtitle}</p> },
    }
}

const CAROUSEL_CSS: &str = r#"
.hero-carousel {
    position: relative;
    width: 100%;
    height: 85vh;
    min-height: 480px;
    overflow: hidden;
    background: #111;
}
.hero-placeholder {
    width: 100%;
    height: 100%;
    background: linear-gradient(135deg, #1a1a1a, #26324a);
}
.hero-slide {
    position: absolute;
    inset: 0;
    opacity: 0;
    pointer-events: none;
    transition: opacity 1s ease-in-out;
}
.hero-slide.active {
    opacity: 1;
    pointer-events: auto;
}
.hero-slide-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: brightness(0.55);
}
.hero-slide-caption {
    position: absolute;
    left: 8%;
    right: 8%;
    bottom: 22%;
    color: #fff;
}
.hero-title {
    font-size: 3.5rem;
    font-weight: 700;
    margin: 0 0 1rem;
}
.hero-subtitle {
    font-size: 1.3rem;
    color: #ddd;
    max-width: 640px;
}
.hero-nav {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    background: rgba(0, 0, 0, 0.35);
    color: #fff;
    border: none;
    font-size: 2.5rem;
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    cursor: pointer;
}
.hero-nav--prev { left: 1.5rem; }
.hero-nav--next { right: 1.5rem; }
.hero-dots {
    position: absolute;
    bottom: 2rem;
    width: 100%;
    display: flex;
    justify-content: center;
    gap: 0.6rem;
}
.hero-dot {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 50%;
    border: none;
    background: rgba(255, 255, 255, 0.4);
    cursor: pointer;
}
.hero-dot.active {
    background: #7EB2FF;
}
@media (max-width: 768px) {
    .hero-title { font-size: 2.2rem; }
    .hero-nav { display: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_back_to_start_after_full_cycle() {
        for len in 1..6 {
            let mut state = CarouselState::new(len, 5_000);
            state.jump_to(len / 2);
            let start = state.index();
            for _ in 0..len {
                state.next();
            }
            assert_eq!(state.index(), start, "len {}", len);
        }
    }

    #[test]
    fn previous_then_next_is_identity() {
        let mut state = CarouselState::new(4, 0);
        for start in 0..4 {
            state.jump_to(start);
            state.previous();
            state.next();
            assert_eq!(state.index(), start);
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut state = CarouselState::new(3, 0);
        state.previous();
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn every_transition_bumps_replay_key() {
        let mut state = CarouselState::new(3, 0);
        let mut last = state.replay_key();
        state.next();
        assert_ne!(state.replay_key(), last);
        last = state.replay_key();
        state.previous();
        assert_ne!(state.replay_key(), last);
        last = state.replay_key();
        assert!(state.jump_to(state.index()));
        assert_ne!(state.replay_key(), last);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut state = CarouselState::new(3, 0);
        let key = state.replay_key();
        assert!(!state.jump_to(3));
        assert_eq!(state.index(), 0);
        assert_eq!(state.replay_key(), key);
    }

    #[test]
    fn empty_carousel_never_schedules_or_moves() {
        let mut state = CarouselState::new(0, 5_000);
        assert_eq!(state.autoplay_delay(), None);
        assert!(!state.has_controls());
        state.next();
        state.previous();
        assert!(!state.jump_to(0));
        assert_eq!(state.index(), 0);
        assert_eq!(state.replay_key(), 0);
    }

    #[test]
    fn single_slide_has_no_autoplay_or_controls() {
        let state = CarouselState::new(1, 5_000);
        assert_eq!(state.autoplay_delay(), None);
        assert!(!state.has_controls());
    }

    #[test]
    fn autoplay_disabled_by_zero_interval() {
        assert_eq!(CarouselState::new(3, 0).autoplay_delay(), None);
        assert_eq!(CarouselState::new(3, 6_000).autoplay_delay(), Some(6_000));
    }

    #[test]
    fn reducer_ignores_bad_jump_and_resets_on_new_length() {
        let state = Rc::new(CarouselState::new(3, 1_000));
        let moved = state.clone().reduce(CarouselAction::Next);
        assert_eq!(moved.index(), 1);

        let same = moved.clone().reduce(CarouselAction::JumpTo(10));
        assert!(Rc::ptr_eq(&same, &moved));

        let reset = same.reduce(CarouselAction::Reset { len: 2, autoplay_ms: 0 });
        assert_eq!(reset.index(), 0);
        assert_eq!(reset.len(), 2);
        assert_eq!(reset.autoplay_delay(), None);
        assert_ne!(reset.replay_key(), moved.replay_key());
    }
}
