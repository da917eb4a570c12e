//! Resolving command-line choices into a game

use super::day::{CalendarError, Date, day_index, random_day, today_index};
use super::state::Game;
use crate::core::FeedbackRule;
use crate::wordlists::WordBank;
use rand::Rng;
use tracing::info;

/// Which puzzle to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DaySelection {
    #[default]
    Today,
    Day(usize),
    Date(Date),
    Random,
}

impl DaySelection {
    /// Turn the selection into a day number
    ///
    /// # Errors
    ///
    /// Returns a `CalendarError` when the date is before day 0 or the clock
    /// cannot be read.
    pub fn resolve<R: Rng + ?Sized>(
        self,
        answer_count: usize,
        rng: &mut R,
    ) -> Result<usize, CalendarError> {
        match self {
            Self::Today => today_index(),
            Self::Day(day) => Ok(day),
            Self::Date(date) => day_index(date),
            Self::Random => Ok(random_day(answer_count, rng)),
        }
    }
}

/// Everything needed to start a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub day: usize,
    pub rule: FeedbackRule,
    pub bank: WordBank,
}

impl GameConfig {
    /// Resolve the day selection against a word bank
    ///
    /// # Errors
    ///
    /// Propagates day resolution errors.
    pub fn resolve<R: Rng + ?Sized>(
        selection: DaySelection,
        rule: FeedbackRule,
        bank: WordBank,
        rng: &mut R,
    ) -> Result<Self, CalendarError> {
        let day = selection.resolve(bank.answer_count(), rng)?;
        info!(?selection, day, ?rule, "puzzle selected");
        Ok(Self { day, rule, bank })
    }

    #[must_use]
    pub fn new_game(&self) -> Game {
        Game::for_day(self.day, &self.bank, self.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> WordBank {
        WordBank::from_lists(words_from_slice(&["cigar", "rebut", "sissy"]), Vec::new()).unwrap()
    }

    #[test]
    fn explicit_day_is_kept() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(DaySelection::Day(42).resolve(3, &mut rng), Ok(42));
    }

    #[test]
    fn date_selection_uses_day_index() {
        let mut rng = StdRng::seed_from_u64(1);
        let date = Date::new(2021, 6, 21).unwrap();
        assert_eq!(DaySelection::Date(date).resolve(3, &mut rng), Ok(2));

        let early = Date::new(2020, 1, 1).unwrap();
        assert!(DaySelection::Date(early).resolve(3, &mut rng).is_err());
    }

    #[test]
    fn random_selection_within_answers() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert!(DaySelection::Random.resolve(3, &mut rng).unwrap() < 3);
        }
    }

    #[test]
    fn config_builds_game() {
        let mut rng = StdRng::seed_from_u64(1);
        let config =
            GameConfig::resolve(DaySelection::Day(1), FeedbackRule::Strict, bank(), &mut rng)
                .unwrap();
        let game = config.new_game();

        assert_eq!(game.day(), 1);
        assert_eq!(game.answer().text(), "rebut");
        assert_eq!(game.rule(), FeedbackRule::Strict);
    }
}
