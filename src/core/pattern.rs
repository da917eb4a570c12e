//! Per-guess feedback calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LEN, Word};

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Square used in the shareable summary
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// How repeated letters in a guess are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackRule {
    /// Exact match first, then plain containment in the answer
    #[default]
    Containment,
    /// Yellows are only handed out while unmatched copies remain in the answer
    Strict,
}

/// Feedback pattern for a guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    fn encode(result: [Feedback; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for feedback in result {
            pattern += feedback.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self::new(pattern)
    }

    /// Score `guess` against `answer` under the given rule
    #[must_use]
    pub fn score(guess: &Word, answer: &Word, rule: FeedbackRule) -> Self {
        match rule {
            FeedbackRule::Containment => Self::evaluate(guess, answer),
            FeedbackRule::Strict => Self::calculate(guess, answer),
        }
    }

    /// Exact-match-then-containment feedback
    ///
    /// A letter in the right place is green. Any other letter that occurs
    /// somewhere in the answer is yellow, however many times it was guessed.
    ///
    /// # Examples
    /// ```
    /// use termle::core::{Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("abide").unwrap();
    /// assert_eq!(Pattern::evaluate(&guess, &answer).to_emoji(), "⬛⬛🟨🟨🟨");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LEN];

        for (i, &letter) in guess.chars().iter().enumerate() {
            result[i] = if letter == answer.char_at(i) {
                Feedback::Correct
            } else if answer.has_letter(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }

        Self::encode(result)
    }

    /// Duplicate-aware feedback
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use termle::core::{Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("abide").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_emoji(), "⬛⬛🟨⬛🟨");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut answer_available = answer.letter_counts();

        // First pass: greens
        // Allow: Index needed to read guess/answer and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                result[i] = Feedback::Correct;
                let slot = &mut answer_available[usize::from(letter - b'a')];
                *slot = slot.saturating_sub(1);
            }
        }

        // Second pass: yellows from whatever is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Feedback::Absent {
                let slot = &mut answer_available[usize::from(guess.char_at(i) - b'a')];
                if *slot > 0 {
                    result[i] = Feedback::Present;
                    *slot -= 1;
                }
            }
        }

        Self::encode(result)
    }

    /// Feedback for a single position (0-4)
    #[must_use]
    pub fn feedback_at(self, position: usize) -> Feedback {
        let mut val = self.0;
        for _ in 0..position {
            val /= 3;
        }
        Feedback::from_digit(val % 3)
    }

    /// All five verdicts, left to right
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        std::array::from_fn(|i| self.feedback_at(i))
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&f| f == Feedback::Correct)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&f| f == Feedback::Present)
            .count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬛/⬜ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        let chars: [char; WORD_LEN] = chars.try_into().ok()?;

        let mut result = [Feedback::Absent; WORD_LEN];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Feedback::Correct,
                'Y' | 'y' | '🟨' => Feedback::Present,
                '-' | '_' | '⬛' | '⬜' => Feedback::Absent,
                _ => return None,
            };
        }

        Some(Self::encode(result))
    }

    /// Convert pattern to the emoji row used in the share summary
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().iter().map(|f| f.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
