use leptos::{html, prelude::*};

use crate::view_state::{hero_letters, Section, ViewState};

use super::observe::observe_visibility;

/// Fraction of a section that must be visible before it becomes the active
/// navigation target.
const ACTIVE_THRESHOLD: f64 = 0.5;

/// Wraps one page section: renders the `<section id=...>` element, registers
/// its viewport observers, and drives the one-shot entrance animation from
/// the section's revealed flag.
#[component]
pub fn RevealSection(
    section: Section,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let state = expect_context::<ViewState>();
    let el = NodeRef::<html::Section>::new();

    // Entrance trigger on first viewport entry. The revealed flag is
    // monotonic, so later re-entries are no-ops.
    observe_visibility(el, 0.0, move || state.reveal(section));
    // Active-section tracking at the 50% visibility threshold.
    observe_visibility(el, ACTIVE_THRESHOLD, move || state.section_entered(section));

    view! {
        <section
            id=section.id()
            node_ref=el
            class=class
            style=move || entrance_style(state.is_revealed(section))
        >
            {children()}
        </section>
    }
}

fn entrance_style(revealed: bool) -> &'static str {
    if revealed {
        "opacity: 1; transform: translateY(0); \
         transition: opacity 0.6s ease-out, transform 0.6s ease-out"
    } else {
        "opacity: 0; transform: translateY(20px); \
         transition: opacity 0.6s ease-out, transform 0.6s ease-out"
    }
}

/// The hero heading, decomposed into per-character units that cascade in
/// left-to-right once the home section reveals. Spaces render as non-breaking
/// spaces so they keep their layout width during the animation.
#[component]
pub fn HeroLetters(text: &'static str) -> impl IntoView {
    let state = expect_context::<ViewState>();

    hero_letters(text)
        .into_iter()
        .map(|letter| {
            let delay = letter.delay_secs();
            view! {
                <span
                    class="inline-block bg-gradient-to-r from-teal-300 via-green-400 to-teal-300 bg-clip-text text-transparent"
                    style=move || letter_style(state.is_revealed(Section::Home), delay)
                >
                    {letter.ch.to_string()}
                </span>
            }
        })
        .collect_view()
}

fn letter_style(revealed: bool, delay: f64) -> String {
    let (opacity, offset) = if revealed { (1, 0) } else { (0, 50) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity 0.5s ease-out {delay}s, transform 0.5s ease-out {delay}s"
    )
}

/// Style for hero elements that fade in after the letter cascade (the
/// subtitle and the social links).
pub fn delayed_fade_style(revealed: bool, delay: f64) -> String {
    let (opacity, offset) = if revealed { (1, 0) } else { (0, 20) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity 0.6s ease-out {delay}s, transform 0.6s ease-out {delay}s"
    )
}
