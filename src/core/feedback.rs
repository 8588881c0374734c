//! Guess evaluation and per-letter feedback
//!
//! Feedback is one [`Mark`] per guess position:
//! - `Exact`: letter in the correct position
//! - `Present`: letter in the secret, but elsewhere
//! - `Absent`: letter not in the secret (after duplicates are accounted for)

use super::word::{WORD_LENGTH, Word, WordError};

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Emoji square for this mark, as used in shared result grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, aligned to guess positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All exact (the guess is the secret)
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LENGTH]);

    /// Wrap precomputed marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Duplicate letters are handled with an explicit per-letter pool:
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool
    /// 2. Second pass: mark remaining letters present while the pool still has them
    ///
    /// No letter of the secret is ever credited to two guess positions.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark, Word};
    ///
    /// let secret = Word::new("alloy").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    ///
    /// use Mark::*;
    /// assert_eq!(
    ///     Feedback::calculate(&guess, &secret).marks(),
    ///     &[Present, Present, Exact, Absent, Exact]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // Index needed to compare guess[i] with secret[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                marks[i] = Mark::Exact;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks, in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over the marks in guess order
    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        self.0.iter().copied()
    }

    /// Check if every letter is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.iter().filter(|&m| m == mark).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(Mark::emoji).collect()
    }
}

/// Evaluate a raw guess string against the secret
///
/// This is the defensive entry point: the guess is validated before the
/// two-pass comparison runs.
///
/// # Errors
/// Returns `WordError` if the guess is not 5 ASCII letters.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
///
/// let secret = Word::new("crane").unwrap();
/// assert!(evaluate(&secret, "crane").unwrap().is_solved());
/// assert!(evaluate(&secret, "cranes").is_err());
/// ```
pub fn evaluate(secret: &Word, guess: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    Ok(Feedback::calculate(&guess, secret))
}

#[cfg(test)]
mod tests {
    use super::Mark::{Absent, Exact, Present};
    use super::*;
    use proptest::prelude::*;

    fn feedback(guess: &str, secret: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn all_exact_when_guess_is_secret() {
        for word in ["crane", "slate", "audio", "zzzzz", "alloy"] {
            assert_eq!(feedback(word, word), Feedback::SOLVED);
        }
    }

    #[test]
    fn all_absent_without_shared_letters() {
        let result = feedback("abcde", "fghij");
        assert_eq!(result.marks(), &[Absent; 5]);
        assert_eq!(result.count(Absent), 5);
    }

    #[test]
    fn duplicate_letters_never_over_credited() {
        // Secret ALLOY has two L's; guess LOLLY has three.
        assert_eq!(
            feedback("lolly", "alloy").marks(),
            &[Present, Present, Exact, Absent, Exact]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_present() {
        // The only E of SLATE is claimed by the exact match at position 4,
        // so the E at position 2 gets nothing.
        assert_eq!(
            feedback("geese", "slate").marks(),
            &[Absent, Absent, Absent, Present, Exact]
        );
    }

    #[test]
    fn repeated_guess_letter_against_single_secret_letter() {
        // ROBOT vs FLOOR: first O present, second O exact
        assert_eq!(
            feedback("robot", "floor").marks(),
            &[Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn classic_example() {
        assert_eq!(
            feedback("crane", "slate").marks(),
            &[Absent, Absent, Exact, Absent, Exact]
        );
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(feedback("robot", "floor").to_emoji(), "🟨🟨⬜🟩⬜");
        assert_eq!(Feedback::SOLVED.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn evaluate_rejects_invalid_guesses() {
        let secret = Word::new("crane").unwrap();
        assert_eq!(evaluate(&secret, "cran"), Err(WordError::InvalidLength(4)));
        assert_eq!(evaluate(&secret, "cr4ne"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn evaluate_accepts_lowercase() {
        let secret = Word::new("CRANE").unwrap();
        assert!(evaluate(&secret, "crane").unwrap().is_solved());
    }

    proptest! {
        #[test]
        fn self_evaluation_is_solved(word in "[A-Z]{5}") {
            let w = Word::new(&word).unwrap();
            prop_assert!(Feedback::calculate(&w, &w).is_solved());
        }

        #[test]
        fn disjoint_letters_are_absent(secret in "[A-M]{5}", guess in "[N-Z]{5}") {
            prop_assert_eq!(feedback(&guess, &secret).count(Absent), 5);
        }

        #[test]
        fn credited_letters_never_exceed_secret(secret in "[A-E]{5}", guess in "[A-E]{5}") {
            let secret_word = Word::new(&secret).unwrap();
            let guess_word = Word::new(&guess).unwrap();
            let result = Feedback::calculate(&guess_word, &secret_word);
            let available = secret_word.letter_counts();

            for letter in b'A'..=b'E' {
                let credited = guess_word
                    .letters()
                    .iter()
                    .zip(result.iter())
                    .filter(|&(&l, m)| l == letter && m != Absent)
                    .count();
                let in_secret = usize::from(available.get(&letter).copied().unwrap_or(0));
                prop_assert!(credited <= in_secret);
            }
        }

        #[test]
        fn exact_marks_match_positions(secret in "[A-E]{5}", guess in "[A-E]{5}") {
            let result = feedback(&guess, &secret);
            for (i, mark) in result.iter().enumerate() {
                prop_assert_eq!(mark == Exact, guess.as_bytes()[i] == secret.as_bytes()[i]);
            }
        }
    }
}
