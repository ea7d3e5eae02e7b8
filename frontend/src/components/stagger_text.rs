use yew::prelude::*;

use crate::config;
use crate::models::RevealMode;

/// One animated piece of a staggered string. Whitespace in letter mode has
/// no delay and is rendered as a non-breaking space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub delay_ms: Option<u32>,
}

pub fn stagger_fragments(text: &str, mode: RevealMode, stagger_ms: u32) -> Vec<Fragment> {
    match mode {
        RevealMode::Word => text
            .split(' ')
            .zip(0u32..)
            .map(|(word, i)| Fragment {
                text: word.to_string(),
                delay_ms: Some(i * stagger_ms),
            })
            .collect(),
        RevealMode::Letter => {
            let mut slot = 0u32;
            text.chars()
                .map(|c| {
                    if c.is_whitespace() {
                        Fragment { text: "\u{a0}".to_string(), delay_ms: None }
                    } else {
                        let delay_ms = Some(slot * stagger_ms);
                        slot += 1;
                        Fragment { text: c.to_string(), delay_ms }
                    }
                })
                .collect()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerTextProps {
    pub text: AttrValue,
    pub mode: RevealMode,
    #[prop_or(config::STAGGER_DELAY_MS)]
    pub stagger_ms: u32,
    /// Added to every fragment's delay, for text that follows another reveal.
    #[prop_or_default]
    pub delay_offset_ms: u32,
}

#[function_component(StaggerText)]
pub fn stagger_text(props: &StaggerTextProps) -> Html {
    let fragments = stagger_fragments(&props.text, props.mode, props.stagger_ms);
    let word_mode = props.mode == RevealMode::Word;

    html! {
        <span class="stagger-text" aria-label={props.text.clone()}>
            {
                for fragments.into_iter().map(|fragment| match fragment.delay_ms {
                    Some(delay) => {
                        let text = if word_mode {
                            format!("{}\u{a0}", fragment.text)
                        } else {
                            fragment.text
                        };
                        html! {
                            <span
                                class="stagger-fragment"
                                aria-hidden="true"
                                style={format!("animation-delay: {}ms;", delay + props.delay_offset_ms)}
                            >
                                {text}
                            </span>
                        }
                    }
                    None => html! {
                        <span class="stagger-space" aria-hidden="true">{fragment.text}</span>
                    },
                })
            }
            <style>
                {r#"
                .stagger-fragment {
                    display: inline-block;
                    opacity: 0;
                    animation: staggerIn 0.5s ease-out forwards;
                }
                @keyframes staggerIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
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
    fn word_mode_delays_each_word() {
        let fragments = stagger_fragments("ab cd", RevealMode::Word, 50);
        assert_eq!(
            fragments,
            vec![
                Fragment { text: "ab".into(), delay_ms: Some(0) },
                Fragment { text: "cd".into(), delay_ms: Some(50) },
            ]
        );
    }

    #[test]
    fn word_mode_keeps_empty_words_from_double_spaces() {
        let fragments = stagger_fragments("a  b", RevealMode::Word, 10);
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[1].text, "");
        assert_eq!(fragments[2].delay_ms, Some(20));
    }

    #[test]
    fn letter_mode_skips_spaces_when_counting() {
        let fragments = stagger_fragments("ab cd", RevealMode::Letter, 30);
        let delays: Vec<Option<u32>> = fragments.iter().map(|f| f.delay_ms).collect();
        assert_eq!(delays, vec![Some(0), Some(30), None, Some(60), Some(90)]);
        assert_eq!(fragments[2].text, "\u{a0}");
        assert_eq!(fragments[3].text, "c");
    }

    #[test]
    fn empty_text_in_letter_mode_has_no_fragments() {
        assert!(stagger_fragments("", RevealMode::Letter, 30).is_empty());
    }
}
