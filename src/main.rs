//! Termle - CLI
//!
//! Daily word guessing game with a line-based console mode and a full-screen TUI.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use termle::{
    commands::run_console,
    core::FeedbackRule,
    game::{Date, DaySelection, GameConfig},
    interactive::{App, run_tui},
    output::print_score,
    wordlists::{
        ANSWERS, GUESSES, WordBank,
        loader::{load_from_file, words_from_slice},
    },
};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "termle",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Select a puzzle by day number (default: today's, by local date).
    /// Day numbers index the bundled answer list, which is not the official
    /// puzzle order, and wrap around at its end
    #[arg(short, long, global = true, conflicts_with = "date")]
    day: Option<usize>,

    /// Select the puzzle for a date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date)]
    date: Option<Date>,

    /// Pick a random puzzle (overrides --day and --date)
    #[arg(short, long, global = true)]
    random: bool,

    /// Only mark as many yellows as the answer has copies of a letter
    #[arg(long, global = true)]
    strict: bool,

    /// Answer list to use instead of the bundled one
    #[arg(long, global = true, value_name = "PATH")]
    answers: Option<PathBuf>,

    /// Guess list to use instead of the bundled one
    #[arg(long, global = true, value_name = "PATH")]
    guesses: Option<PathBuf>,

    /// Log diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one guess per line (default)
    Play,

    /// Play in a full-screen interface
    Tui,
}

fn parse_date(s: &str) -> Result<Date, String> {
    Date::parse(s).map_err(|e| e.to_string())
}

impl Cli {
    fn day_selection(&self) -> DaySelection {
        if self.random {
            DaySelection::Random
        } else if let Some(day) = self.day {
            DaySelection::Day(day)
        } else if let Some(date) = self.date {
            DaySelection::Date(date)
        } else {
            DaySelection::Today
        }
    }

    const fn feedback_rule(&self) -> FeedbackRule {
        if self.strict {
            FeedbackRule::Strict
        } else {
            FeedbackRule::Containment
        }
    }
}

/// Install a stderr subscriber when `-v` was given
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build the word bank from the bundled lists or `--answers`/`--guesses`
fn load_word_bank(answers: Option<&PathBuf>, guesses: Option<&PathBuf>) -> Result<WordBank> {
    let answer_words = match answers {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read answer list {}", path.display()))?,
        None => words_from_slice(ANSWERS),
    };
    let guess_words = match guesses {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read guess list {}", path.display()))?,
        None => words_from_slice(GUESSES),
    };

    Ok(WordBank::from_lists(answer_words, guess_words)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bank = load_word_bank(cli.answers.as_ref(), cli.guesses.as_ref())?;
    let config = GameConfig::resolve(
        cli.day_selection(),
        cli.feedback_rule(),
        bank,
        &mut rand::rng(),
    )?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Tui => run_tui_command(config),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let mut game = config.new_game();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_console(&mut game, &config.bank, stdin.lock(), &mut stdout)
}

fn run_tui_command(config: GameConfig) -> Result<()> {
    let app = run_tui(App::new(config))?;

    // Leave the share summary on the normal screen
    if app.game.is_complete() {
        print_score(&mut io::stdout(), &app.game)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};
    use std::fs;
    use termle::wordlists::WordBankError;

    fn temp_list(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("termle-{name}-{}.txt", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn random_overrides_day() {
        let cli = Cli::try_parse_from(["termle", "--day", "5", "--random"]).unwrap();
        assert_eq!(cli.day_selection(), DaySelection::Random);
    }

    #[test]
    fn day_and_date_conflict() {
        let err = Cli::try_parse_from(["termle", "--day", "5", "--date", "2022-01-01"]).err();
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::ArgumentConflict));
    }

    #[test]
    fn flags_select_day_date_and_rule() {
        let cli = Cli::try_parse_from(["termle", "tui", "-d", "7", "--strict"]).unwrap();
        assert_eq!(cli.day_selection(), DaySelection::Day(7));
        assert_eq!(cli.feedback_rule(), FeedbackRule::Strict);
        assert!(matches!(cli.command, Some(Commands::Tui)));

        let cli = Cli::try_parse_from(["termle", "--date", "2021-06-21"]).unwrap();
        assert_eq!(cli.day_selection(), DaySelection::Date(Date::new(2021, 6, 21).unwrap()));
        assert_eq!(cli.feedback_rule(), FeedbackRule::Containment);

        let cli = Cli::try_parse_from(["termle"]).unwrap();
        assert_eq!(cli.day_selection(), DaySelection::Today);
        assert!(cli.command.is_none());
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(Cli::try_parse_from(["termle", "--date", "2022-02-30"]).is_err());
    }

    #[test]
    fn day_help_mentions_bundled_order() {
        let command = Cli::command();
        let day = command
            .get_arguments()
            .find(|arg| arg.get_id() == "day")
            .unwrap();
        let help = day.get_long_help().or_else(|| day.get_help()).unwrap().to_string();
        assert!(help.contains("not the official"));
    }

    #[test]
    fn answers_file_without_valid_words_is_rejected() {
        let path = temp_list("no-answers", "toolong\nab\n12345\n");
        let result = load_word_bank(Some(&path), None);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<WordBankError>(),
            Some(&WordBankError::NoAnswers)
        );
    }

    #[test]
    fn answers_file_replaces_bundled_list() {
        let path = temp_list("answers", "crane\nslate\n");
        let result = load_word_bank(Some(&path), None);
        fs::remove_file(&path).unwrap();

        let bank = result.unwrap();
        assert_eq!(bank.answer_count(), 2);
        assert_eq!(bank.answer_for_day(0).text(), "crane");
        assert_eq!(bank.answer_for_day(3).text(), "slate");
    }

    #[test]
    fn missing_answers_file_names_the_path() {
        let path = std::env::temp_dir().join("termle-does-not-exist.txt");
        let err = load_word_bank(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("failed to read answer list"));
    }
}
