//! Game state and turn evaluation

use crate::core::{Feedback, FeedbackRule, Pattern, WORD_LEN, Word, WordError};
use crate::wordlists::WordBank;
use std::fmt;
use tracing::{debug, info};

/// Guesses allowed per game
pub const MAX_TURNS: usize = 6;

/// One cell of the display board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Filled { letter: u8, feedback: Feedback },
}

/// Why a guess was refused
///
/// A refused guess leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Malformed(WordError),
    NotInWordList(Word),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(_) => write!(f, "Please enter a 5 letter word"),
            Self::NotInWordList(_) => write!(f, "Not in word list"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

/// A single game in progress
#[derive(Debug, Clone)]
pub struct Game {
    day: usize,
    answer: Word,
    rule: FeedbackRule,
    current_turn: usize,
    complete: bool,
    won: bool,
    board: [[Tile; WORD_LEN]; MAX_TURNS],
    rows: Vec<Pattern>,
}

impl Game {
    #[must_use]
    pub fn new(day: usize, answer: Word, rule: FeedbackRule) -> Self {
        Self {
            day,
            answer,
            rule,
            current_turn: 0,
            complete: false,
            won: false,
            board: [[Tile::Empty; WORD_LEN]; MAX_TURNS],
            rows: Vec::with_capacity(MAX_TURNS),
        }
    }

    /// Start the game for a day number
    #[must_use]
    pub fn for_day(day: usize, bank: &WordBank, rule: FeedbackRule) -> Self {
        Self::new(day, bank.answer_for_day(day).clone(), rule)
    }

    /// Validate and play one guess
    ///
    /// Returns the feedback for the guess.
    ///
    /// # Errors
    ///
    /// - `GuessError::GameOver` once the game is complete
    /// - `GuessError::Malformed` unless the input is five letters
    /// - `GuessError::NotInWordList` for words the bank does not accept
    pub fn submit(&mut self, raw: &str, bank: &WordBank) -> Result<Pattern, GuessError> {
        if self.complete {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(raw).map_err(GuessError::Malformed)?;
        if !bank.is_valid_guess(&guess) {
            debug!(guess = %guess, "rejected guess not in word list");
            return Err(GuessError::NotInWordList(guess));
        }

        Ok(self.add_guess(&guess))
    }

    fn add_guess(&mut self, guess: &Word) -> Pattern {
        let pattern = Pattern::score(guess, &self.answer, self.rule);

        for (i, tile) in self.board[self.current_turn].iter_mut().enumerate() {
            *tile = Tile::Filled {
                letter: guess.char_at(i),
                feedback: pattern.feedback_at(i),
            };
        }
        self.rows.push(pattern);
        self.current_turn += 1;

        if *guess == self.answer {
            self.won = true;
        }
        if self.won || self.current_turn == MAX_TURNS {
            self.complete = true;
        }

        info!(
            turn = self.current_turn,
            pattern = %pattern.to_emoji(),
            complete = self.complete,
            won = self.won,
            "guess played"
        );
        pattern
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn rule(&self) -> FeedbackRule {
        self.rule
    }

    /// Guesses played so far
    #[must_use]
    pub const fn current_turn(&self) -> usize {
        self.current_turn
    }

    #[must_use]
    pub const fn turns_remaining(&self) -> usize {
        MAX_TURNS - self.current_turn
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// The 6x5 display board, top row first
    #[must_use]
    pub const fn board(&self) -> &[[Tile; WORD_LEN]; MAX_TURNS] {
        &self.board
    }

    /// Feedback for each played row
    #[must_use]
    pub fn rows(&self) -> &[Pattern] {
        &self.rows
    }

    /// Best feedback seen so far for each letter `a..=z`
    #[must_use]
    pub fn letter_states(&self) -> [Option<Feedback>; 26] {
        let mut states = [None; 26];
        for tile in self.board.iter().flatten() {
            if let Tile::Filled { letter, feedback } = *tile {
                let slot = &mut states[usize::from(letter - b'a')];
                *slot = (*slot).max(Some(feedback));
            }
        }
        states
    }

    /// Shareable result
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            day: self.day,
            turns: self.won.then_some(self.current_turn),
            rows: self.rows.clone(),
            answer: (!self.won).then(|| self.answer.clone()),
        }
    }
}

/// End-of-game result: header plus emoji rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub day: usize,
    /// Turns used on a win, `None` on a loss
    pub turns: Option<usize>,
    pub rows: Vec<Pattern>,
    /// Revealed only when the game was lost
    pub answer: Option<Word>,
}

impl Summary {
    /// `Wordle <day> <n>/6`, with `X` for a loss
    #[must_use]
    pub fn header(&self) -> String {
        let score = self
            .turns
            .map_or_else(|| "X".to_string(), |turns| turns.to_string());
        format!("Wordle {} {score}/{MAX_TURNS}", self.day)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(f, "{}", row.to_emoji())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn bank() -> WordBank {
        WordBank::from_lists(
            words_from_slice(&["cigar", "rebut", "sissy"]),
            words_from_slice(&[
                "crane", "slate", "audio", "ghost", "lymph", "wrong", "cigar", "rebut",
            ]),
        )
        .unwrap()
    }

    fn game() -> Game {
        Game::for_day(0, &bank(), FeedbackRule::Containment)
    }

    #[test]
    fn new_game_is_blank() {
        let game = game();
        assert_eq!(game.answer().text(), "cigar");
        assert_eq!(game.current_turn(), 0);
        assert_eq!(game.turns_remaining(), MAX_TURNS);
        assert!(!game.is_complete());
        assert!(!game.is_won());
        assert!(game.board().iter().flatten().all(|t| *t == Tile::Empty));
        assert!(game.rows().is_empty());
    }

    #[test]
    fn malformed_guess_leaves_state_alone() {
        let bank = bank();
        let mut game = game();

        for input in ["", "abc", "toolong", "cig4r", "ci ar"] {
            assert!(matches!(
                game.submit(input, &bank),
                Err(GuessError::Malformed(_))
            ));
        }
        assert_eq!(game.current_turn(), 0);
        assert_eq!(
            GuessError::Malformed(WordError::InvalidLength(3)).to_string(),
            "Please enter a 5 letter word"
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let bank = bank();
        let mut game = game();

        let err = game.submit("zzzzz", &bank).unwrap_err();
        assert_eq!(err.to_string(), "Not in word list");
        assert_eq!(game.current_turn(), 0);
    }

    #[test]
    fn guess_fills_board_row() {
        let bank = bank();
        let mut game = game();

        let pattern = game.submit("crane\n", &bank).unwrap();
        assert_eq!(pattern.to_emoji(), "🟩🟨🟨⬛⬛");
        assert_eq!(game.current_turn(), 1);
        assert_eq!(game.turns_remaining(), 5);
        assert_eq!(
            game.board()[0][0],
            Tile::Filled {
                letter: b'c',
                feedback: Feedback::Correct
            }
        );
        assert_eq!(game.board()[1], [Tile::Empty; WORD_LEN]);
        assert!(!game.is_complete());
    }

    #[test]
    fn lowercase_and_uppercase_guesses_match() {
        let bank = bank();
        let mut game = game();

        let pattern = game.submit("CiGaR", &bank).unwrap();
        assert!(pattern.is_perfect());
        assert!(game.is_won());
        assert!(game.is_complete());
        assert_eq!(game.current_turn(), 1);
    }

    #[test]
    fn six_misses_lose() {
        let bank = bank();
        let mut game = game();

        for guess in ["crane", "slate", "audio", "ghost", "lymph", "wrong"] {
            assert!(!game.is_complete());
            game.submit(guess, &bank).unwrap();
        }
        assert!(game.is_complete());
        assert!(!game.is_won());
        assert_eq!(game.turns_remaining(), 0);
        assert_eq!(game.submit("cigar", &bank), Err(GuessError::GameOver));
    }

    #[test]
    fn win_on_last_turn() {
        let bank = bank();
        let mut game = game();

        for guess in ["crane", "slate", "audio", "ghost", "lymph", "cigar"] {
            game.submit(guess, &bank).unwrap();
        }
        assert!(game.is_won());
        assert_eq!(game.summary().header(), "Wordle 0 6/6");
    }

    #[test]
    fn strict_rule_flows_through() {
        let bank = WordBank::from_lists(
            words_from_slice(&["blush"]),
            words_from_slice(&["lolly"]),
        )
        .unwrap();
        let mut loose = Game::for_day(0, &bank, FeedbackRule::Containment);
        let mut strict = Game::for_day(0, &bank, FeedbackRule::Strict);

        assert_eq!(loose.submit("lolly", &bank).unwrap().count_yellows(), 3);
        assert_eq!(strict.submit("lolly", &bank).unwrap().count_yellows(), 1);
    }

    #[test]
    fn letter_states_keep_best_feedback() {
        let bank = bank();
        let mut game = game();
        game.submit("audio", &bank).unwrap(); // a, i present
        game.submit("rebut", &bank).unwrap(); // r present

        let states = game.letter_states();
        let of = |c: u8| states[usize::from(c - b'a')];
        assert_eq!(of(b'a'), Some(Feedback::Present));
        assert_eq!(of(b'u'), Some(Feedback::Absent));
        assert_eq!(of(b'r'), Some(Feedback::Present));
        assert_eq!(of(b'z'), None);

        game.submit("crane", &bank).unwrap(); // c correct, a/r still present
        assert_eq!(game.letter_states()[usize::from(b'c' - b'a')], Some(Feedback::Correct));
    }

    #[test]
    fn summary_on_win() {
        let bank = bank();
        let mut game = game();
        game.submit("crane", &bank).unwrap();
        game.submit("cigar", &bank).unwrap();

        let summary = game.summary();
        assert_eq!(summary.turns, Some(2));
        assert_eq!(summary.answer, None);
        assert_eq!(
            summary.to_string(),
            "Wordle 0 2/6\n\n🟩🟨🟨⬛⬛\n🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn summary_on_loss_reveals_answer() {
        let bank = bank();
        let mut game = Game::for_day(4, &bank, FeedbackRule::Containment);
        assert_eq!(game.answer().text(), "rebut");
        for guess in ["crane", "slate", "audio", "ghost", "lymph", "wrong"] {
            game.submit(guess, &bank).unwrap();
        }

        let summary = game.summary();
        assert_eq!(summary.header(), "Wordle 4 X/6");
        assert_eq!(summary.answer.map(|w| w.to_string()), Some("REBUT".into()));
        assert_eq!(summary.rows.len(), 6);
    }
}
