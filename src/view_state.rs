use std::fmt;

use leptos::prelude::*;

/// Text rendered letter-by-letter in the hero banner.
pub const HERO_TEXT: &str = "Hi, I am Sumit Dey";

/// The fixed set of page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Education,
    Tech,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Tech,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section element, also used as the nav anchor target.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Tech => "tech",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Text shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Tech => "Tech Stack",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Education => 2,
            Section::Tech => 3,
            Section::Projects => 4,
            Section::Contact => 5,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The single owner of all cross-component view state: the currently active
/// section, the dark-mode flag, and the per-section reveal flags.
///
/// One instance is created in `App` and shared through context. Each cell is
/// written only here and read reactively by the rendering layer. Nothing is
/// persisted; a reload starts from the defaults (active = home, light mode,
/// nothing revealed).
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    active: RwSignal<Section>,
    dark_mode: RwSignal<bool>,
    revealed: [RwSignal<bool>; 6],
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Home),
            dark_mode: RwSignal::new(false),
            revealed: [(); 6].map(|_| RwSignal::new(false)),
        }
    }

    /// The section currently judged in view. Reactive read.
    pub fn active(&self) -> Section {
        self.active.get()
    }

    /// Records a viewport-crossing notification for `section`. Notifications
    /// are applied in delivery order, so when several sections cross the
    /// threshold in one batch the last one processed wins.
    pub fn section_entered(&self, section: Section) {
        self.active.set(section);
    }

    /// Marks `section` revealed. The flag is monotonic: repeat calls after
    /// the first are no-ops, and it never reverts for the session's lifetime.
    pub fn reveal(&self, section: Section) {
        let flag = self.revealed[section.index()];
        if !flag.get_untracked() {
            flag.set(true);
        }
    }

    /// Whether `section`'s entrance animation has been triggered. Reactive read.
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed[section.index()].get()
    }

    /// Current theme flag. Reactive read.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode.get()
    }

    /// Flips the theme flag. The document-root `dark` class is mirrored from
    /// this flag by an effect in `App`.
    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// One animated unit of the hero heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroLetter {
    /// Position in the original text, drives the stagger delay.
    pub index: usize,
    pub ch: char,
}

impl HeroLetter {
    /// Stagger delay before this letter's transition starts, in seconds.
    pub fn delay_secs(&self) -> f64 {
        self.index as f64 / 10.0
    }
}

/// Splits `text` into per-character animation units. Whitespace becomes a
/// non-breaking space so it still occupies layout width mid-animation; every
/// other character is preserved verbatim and in order.
pub fn hero_letters(text: &str) -> Vec<HeroLetter> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| HeroLetter {
            index,
            ch: if ch.is_whitespace() { '\u{00A0}' } else { ch },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_section_defaults_to_home() {
        let state = ViewState::new();
        assert_eq!(state.active(), Section::Home);
    }

    #[test]
    fn test_section_entered_updates_active() {
        let state = ViewState::new();
        state.section_entered(Section::Projects);
        assert_eq!(state.active(), Section::Projects);
    }

    #[test]
    fn test_last_notification_in_batch_wins() {
        let state = ViewState::new();

        // Two sections crossing the threshold in one batch are applied in
        // processing order.
        state.section_entered(Section::About);
        state.section_entered(Section::Tech);
        assert_eq!(state.active(), Section::Tech);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let state = ViewState::new();
        assert!(!state.is_revealed(Section::About));

        state.reveal(Section::About);
        assert!(state.is_revealed(Section::About));

        // Re-entering the viewport must not reset or re-fire the flag.
        state.reveal(Section::About);
        assert!(state.is_revealed(Section::About));

        // Other sections are untouched.
        assert!(!state.is_revealed(Section::Contact));
    }

    #[test]
    fn test_double_toggle_restores_theme() {
        let state = ViewState::new();
        assert!(!state.dark_mode());

        state.toggle_dark_mode();
        assert!(state.dark_mode());

        state.toggle_dark_mode();
        assert!(!state.dark_mode());
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("footer"), None);
    }

    #[test]
    fn test_tech_section_label() {
        assert_eq!(Section::Tech.label(), "Tech Stack");
        assert_eq!(Section::Tech.id(), "tech");
    }

    #[test]
    fn test_hero_letters_preserve_characters() {
        let letters = hero_letters(HERO_TEXT);

        // One animated unit per input character.
        assert_eq!(letters.len(), HERO_TEXT.chars().count());
        assert_eq!(letters.len(), 18);

        // Spaces render as non-breaking spaces; everything else is verbatim
        // and in original order.
        for (expected, letter) in HERO_TEXT.chars().zip(&letters) {
            if expected == ' ' {
                assert_eq!(letter.ch, '\u{00A0}');
            } else {
                assert_eq!(letter.ch, expected);
            }
        }
        assert_eq!(letters.iter().filter(|l| l.ch == '\u{00A0}').count(), 4);
    }

    #[test]
    fn test_hero_letter_stagger_delays() {
        let letters = hero_letters("abc");
        let delays: Vec<f64> = letters.iter().map(|l| l.delay_secs()).collect();
        assert_eq!(delays, vec![0.0, 0.1, 0.2]);
    }
}
