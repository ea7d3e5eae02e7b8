use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// Typewriter progress over a target string, counted in characters.
///
/// Each target gets a fresh `generation`; ticks scheduled for an older
/// generation are ignored so a late timer can never touch a newer string.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TypewriterState {
    target: String,
    shown: usize,
    generation: u64,
    completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    /// The prefix just reached the full target. Happens once per target.
    Completed,
    Ignored,
}

pub enum TypewriterAction {
    SetTarget(String),
    Tick { generation: u64 },
}

impl TypewriterState {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// The part of the target typed so far. Always a prefix of the target.
    pub fn prefix(&self) -> &str {
        match self.target.char_indices().nth(self.shown) {
            Some((end, _)) => &self.target[..end],
            None => &self.target,
        }
    }

    /// What to render for `text`: the typed prefix, or nothing while the
    /// state still tracks a previous string.
    pub fn visible_prefix(&self, text: &str) -> &str {
        if text == self.target {
            self.prefix()
        } else {
            ""
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.target.chars().count()
    }

    /// Restarts from an empty prefix if `target` differs from the current one.
    pub fn set_target(&mut self, target: &str) -> bool {
        if target == self.target {
            return false;
        }
        self.target = target.to_string();
        self.shown = 0;
        self.completed = false;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation || self.is_done() {
            return TickOutcome::Ignored;
        }
        self.shown += 1;
        if self.is_done() && !self.completed {
            self.completed = true;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }
}

impl Reducible for TypewriterState {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            TypewriterAction::SetTarget(target) => next.set_target(&target),
            TypewriterAction::Tick { generation } => next.tick(generation) != TickOutcome::Ignored,
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedTextProps {
    pub text: AttrValue,
    #[prop_or(config::TITLE_TYPING_MS)]
    pub interval_ms: u32,
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypedText)]
pub fn typed_text(props: &TypedTextProps) -> Html {
    let state = use_reducer(|| TypewriterState::new(props.text.to_string()));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |text| {
                state.dispatch(TypewriterAction::SetTarget(text.to_string()));
                || ()
            },
            props.text.clone(),
        );
    }

    // Re-armed after every character; dropping the timeout cancels it.
    {
        let dispatcher = state.dispatcher();
        let done = state.is_done();
        use_effect_with_deps(
            move |(generation, _shown, interval_ms)| {
                let generation = *generation;
                let timeout = (!done).then(|| {
                    Timeout::new(*interval_ms, move || {
                        dispatcher.dispatch(TypewriterAction::Tick { generation })
                    })
                });
                move || drop(timeout)
            },
            (state.generation(), state.prefix().len(), props.interval_ms),
        );
    }

    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |(_, completed)| {
                if *completed {
                    if let Some(on_complete) = on_complete {
                        on_complete.emit(());
                    }
                }
                || ()
            },
            (state.generation(), state.completed()),
        );
    }

    let shown = state.visible_prefix(&props.text).to_string();
    let idle = state.is_done() && shown.len() == props.text.len();

    html! {
        <span class={classes!("typed-text", props.class.clone())}>
            { shown }
            <span class={classes!("typed-caret", idle.then(|| "typed-caret--idle"))}>{"|"}</span>
            <style>
                {r#"
                .typed-caret {
                    display: inline-block;
                    margin-left: 2px;
                    animation: caretBlink 0.9s steps(1) infinite;
                }
                .typed-caret--idle {
                    opacity: 0;
                    animation: none;
                }
                @keyframes caretBlink {
                    50% { opacity: 0; }
                }
                "#}
            </style>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_character_per_tick_and_completes_once() {
        let mut state = TypewriterState::new("Hi");
        let generation = state.generation();
        assert_eq!(state.prefix(), "");

        assert_eq!(state.tick(generation), TickOutcome::Advanced);
        assert_eq!(state.prefix(), "H");

        assert_eq!(state.tick(generation), TickOutcome::Completed);
        assert_eq!(state.prefix(), "Hi");
        assert!(state.completed());

        assert_eq!(state.tick(generation), TickOutcome::Ignored);
        assert_eq!(state.prefix(), "Hi");
    }

    #[test]
    fn new_target_resets_prefix_and_drops_stale_ticks() {
        let mut state = TypewriterState::new("Hi");
        let old = state.generation();
        state.tick(old);
        assert_eq!(state.prefix(), "H");

        assert!(state.set_target("Yo"));
        assert_eq!(state.prefix(), "");
        assert!(!state.completed());

        assert_eq!(state.tick(old), TickOutcome::Ignored);
        assert_eq!(state.prefix(), "");

        let current = state.generation();
        state.tick(current);
        assert_eq!(state.tick(current), TickOutcome::Completed);
        assert_eq!(state.prefix(), "Yo");
    }

    #[test]
    fn previous_string_is_hidden_until_the_reset_lands() {
        let mut state = TypewriterState::new("Hello");
        let generation = state.generation();
        for _ in 0..3 {
            state.tick(generation);
        }
        assert_eq!(state.visible_prefix("Hello"), "Hel");
        assert_eq!(state.visible_prefix("Yo"), "");

        state.set_target("Yo");
        assert_eq!(state.visible_prefix("Yo"), "");
        state.tick(state.generation());
        assert_eq!(state.visible_prefix("Yo"), "Y");
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut state = TypewriterState::new("Hi");
        let generation = state.generation();
        state.tick(generation);
        assert!(!state.set_target("Hi"));
        assert_eq!(state.prefix(), "H");
        assert_eq!(state.generation(), generation);
    }

    #[test]
    fn empty_target_never_completes() {
        let mut state = TypewriterState::new("");
        assert!(state.is_done());
        assert_eq!(state.tick(state.generation()), TickOutcome::Ignored);
        assert!(!state.completed());
    }

    #[test]
    fn prefix_respects_multibyte_characters() {
        let mut state = TypewriterState::new("héé");
        let generation = state.generation();
        state.tick(generation);
        state.tick(generation);
        assert_eq!(state.prefix(), "hé");
        assert_eq!(state.tick(generation), TickOutcome::Completed);
        assert_eq!(state.prefix(), "héé");
    }

    #[test]
    fn reducer_keeps_identity_for_ignored_actions() {
        let state = Rc::new(TypewriterState::new("Hi"));
        let same = state.clone().reduce(TypewriterAction::SetTarget("Hi".into()));
        assert!(Rc::ptr_eq(&state, &same));

        let stale = same.clone().reduce(TypewriterAction::Tick { generation: 42 });
        assert!(Rc::ptr_eq(&same, &stale));

        let advanced = stale.reduce(TypewriterAction::Tick { generation: 0 });
        assert_eq!(advanced.prefix(), "H");
    }
}
