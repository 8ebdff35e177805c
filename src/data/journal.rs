use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

pub const PROMPTS: [&str; 6] = [
    "What happened today that made you feel this way?",
    "What are you grateful for right now?",
    "What's weighing on your mind?",
    "How did you take care of yourself today?",
    "What would you tell a friend feeling the same way?",
    "What's one thing that brought you joy today?",
];

pub const ENCOURAGEMENTS: [&str; 5] = [
    "Your feelings matter and deserve to be heard. 💙",
    "Thank you for being honest with yourself today. 🌟",
    "Every emotion you feel is valid and important. 💕",
    "You're brave for expressing your true feelings. ✨",
    "Your vulnerability is a strength, not a weakness. 🌸",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    #[error("Empty Entry: Please write something before saving.")]
    EmptyEntry,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Private,
    Friends,
    Public,
}

impl Visibility {
    pub const ALL: [Visibility; 3] = [Visibility::Private, Visibility::Friends, Visibility::Public];

    pub fn label(self) -> &'static str {
        match self {
            Visibility::Private => "Private",
            Visibility::Friends => "Friends Only",
            Visibility::Public => "Public",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Visibility::Private => Visibility::Friends,
            Visibility::Friends => Visibility::Public,
            Visibility::Public => Visibility::Private,
        }
    }
}

/// A saved entry. Kept for the current session only.
#[derive(Clone, Debug, PartialEq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub text: String,
    pub visibility: Visibility,
    pub anonymous: bool,
}

/// The composer state behind the Journal tab.
#[derive(Clone, Debug, Default)]
pub struct JournalDraft {
    pub text: String,
    pub visibility: Visibility,
    pub anonymous: bool,
    pub recording: bool,
    /// Index into `PROMPTS` of the prompt last applied.
    pub selected_prompt: Option<usize>,
}

impl JournalDraft {
    /// Replaces the text with the prompt followed by a blank line.
    pub fn apply_prompt(&mut self, index: usize) {
        if let Some(prompt) = PROMPTS.get(index) {
            self.selected_prompt = Some(index);
            self.text = format!("{prompt}\n\n");
        }
    }

    /// Turns the draft into an entry and clears text and prompt.
    /// Visibility and the anonymous flag carry over to the next entry.
    pub fn save(&mut self, date: NaiveDate) -> Result<JournalEntry, JournalError> {
        if self.text.trim().is_empty() {
            return Err(JournalError::EmptyEntry);
        }
        let entry = JournalEntry {
            date,
            text: std::mem::take(&mut self.text),
            visibility: self.visibility,
            anonymous: self.anonymous,
        };
        self.selected_prompt = None;
        Ok(entry)
    }
}

pub fn pick_encouragement<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ENCOURAGEMENTS.choose(rng).copied().unwrap_or(ENCOURAGEMENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_save_rejects_blank_text() {
        let mut draft = JournalDraft {
            text: "  \n\t ".to_string(),
            ..JournalDraft::default()
        };
        assert_eq!(draft.save(day()), Err(JournalError::EmptyEntry));
        assert_eq!(draft.text, "  \n\t ");
    }

    #[test]
    fn test_save_clears_text_and_prompt() {
        let mut draft = JournalDraft::default();
        draft.apply_prompt(1);
        draft.text.push_str("My cat.");
        draft.visibility = Visibility::Friends;
        let entry = draft.save(day()).unwrap();
        assert_eq!(entry.text, "What are you grateful for right now?\n\nMy cat.");
        assert_eq!(entry.visibility, Visibility::Friends);
        assert!(draft.text.is_empty());
        assert_eq!(draft.selected_prompt, None);
        assert_eq!(draft.visibility, Visibility::Friends);
    }

    #[test]
    fn test_apply_prompt_replaces_text() {
        let mut draft = JournalDraft {
            text: "old".to_string(),
            ..JournalDraft::default()
        };
        draft.apply_prompt(0);
        assert_eq!(draft.text, format!("{}\n\n", PROMPTS[0]));
        assert_eq!(draft.selected_prompt, Some(0));
    }

    #[test]
    fn test_apply_prompt_out_of_range_is_noop() {
        let mut draft = JournalDraft::default();
        draft.apply_prompt(PROMPTS.len());
        assert!(draft.text.is_empty());
        assert_eq!(draft.selected_prompt, None);
    }

    #[test]
    fn test_visibility_cycles() {
        let mut v = Visibility::default();
        for expected in [Visibility::Friends, Visibility::Public, Visibility::Private] {
            v = v.next();
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn test_pick_encouragement_is_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(ENCOURAGEMENTS.contains(&pick_encouragement(&mut rng)));
        }
    }

    #[test]
    fn test_pick_encouragement_same_seed_same_pick() {
        let a = pick_encouragement(&mut StdRng::seed_from_u64(42));
        let b = pick_encouragement(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
