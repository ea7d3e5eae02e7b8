use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackerState {
    Idle,
    Observing { visible: bool },
    /// Terminal for once-only trackers: stays visible, no longer observed.
    Triggered,
}

/// What the owner of the observer should do after an intersection report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverCommand {
    Keep,
    Release,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTracker {
    threshold: f64,
    once: bool,
    state: TrackerState,
}

impl VisibilityTracker {
    pub fn new(threshold: f64, once: bool) -> Self {
        Self {
            threshold,
            once,
            state: TrackerState::Idle,
        }
    }

    pub fn start(&mut self) {
        if self.state == TrackerState::Idle {
            self.state = TrackerState::Observing { visible: false };
        }
    }

    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> ObserverCommand {
        let crossed = intersecting && ratio >= self.threshold;
        match self.state {
            TrackerState::Triggered => ObserverCommand::Release,
            TrackerState::Idle | TrackerState::Observing { .. } => {
                if crossed && self.once {
                    self.state = TrackerState::Triggered;
                    ObserverCommand::Release
                } else {
                    self.state = TrackerState::Observing { visible: crossed };
                    ObserverCommand::Keep
                }
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(
            self.state,
            TrackerState::Triggered | TrackerState::Observing { visible: true }
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(config::DEFAULT_VISIBILITY_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::from("reveal-fade-up"))]
    pub animation_class: AttrValue,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Wraps content that animates in once it scrolls into view.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.setter();
        use_effect_with_deps(
            move |(threshold, once)| {
                let destructor: Box<dyn FnOnce()> = match node_ref.cast::<Element>() {
                    Some(element) => observe(element, *threshold, *once, visible),
                    None => {
                        visible.set(true);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (props.threshold, props.once),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("animation-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node_ref}
            class={classes!(
                "reveal",
                props.class.clone(),
                if *visible { props.animation_class.to_string() } else { "reveal-hidden".to_string() }
            )}
            {style}
        >
            { for props.children.iter() }
            <style>
                {r#"
                .reveal-hidden {
                    opacity: 0;
                }
                .reveal-fade-up {
                    animation: revealFadeUp 0.7s ease-out both;
                }
                @keyframes revealFadeUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}

fn observe(
    element: Element,
    threshold: f64,
    once: bool,
    visible: UseStateSetter<bool>,
) -> Box<dyn FnOnce()> {
    let mut tracker = VisibilityTracker::new(threshold, once);
    tracker.start();

    let on_entries = {
        let visible = visible.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let command = tracker.observe(entry.intersection_ratio(), entry.is_intersecting());
                    visible.set(tracker.is_visible());
                    if command == ObserverCommand::Release {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Box::new(move || {
                observer.disconnect();
                drop(on_entries);
            })
        }
        Err(_) => {
            // Without an observer the content would stay hidden forever.
            visible.set(true);
            Box::new(|| ())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_tracker_stays_visible_after_leaving() {
        let mut tracker = VisibilityTracker::new(0.1, true);
        tracker.start();
        assert!(!tracker.is_visible());

        assert_eq!(tracker.observe(0.05, true), ObserverCommand::Keep);
        assert!(!tracker.is_visible());

        assert_eq!(tracker.observe(0.3, true), ObserverCommand::Release);
        assert_eq!(tracker.state, TrackerState::Triggered);

        assert_eq!(tracker.observe(0.0, false), ObserverCommand::Release);
        assert!(tracker.is_visible());
    }

    #[test]
    fn repeating_tracker_follows_the_threshold() {
        let mut tracker = VisibilityTracker::new(0.5, false);
        tracker.start();

        assert_eq!(tracker.observe(0.6, true), ObserverCommand::Keep);
        assert!(tracker.is_visible());

        assert_eq!(tracker.observe(0.2, true), ObserverCommand::Keep);
        assert!(!tracker.is_visible());

        tracker.observe(0.9, true);
        assert!(tracker.is_visible());
        assert_eq!(tracker.state, TrackerState::Observing { visible: true });
    }

    #[test]
    fn ratio_without_intersection_does_not_count() {
        let mut tracker = VisibilityTracker::new(0.0, true);
        tracker.start();
        assert_eq!(tracker.observe(0.0, false), ObserverCommand::Keep);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.observe(0.0, true), ObserverCommand::Release);
        assert!(tracker.is_visible());
    }
}
