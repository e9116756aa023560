//! Daily Word - CLI
//!
//! Daily word-guessing puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use daily_word::{
    commands::{ConfigUpdate, print_config, run_show, run_simple, run_stats, update_config},
    game::SessionManager,
    storage::JsonStore,
    wordlists::DailyWordSource,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "daily_word",
    about = "Guess the word of the day, one puzzle per calendar date",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding session, statistics and configuration
    /// (default: $DAILY_WORD_DIR, then the platform data directory)
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Play the puzzle of another date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// File of secret words, one per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show cumulative statistics
    Stats,

    /// Show today's board without playing
    Show,

    /// Show or change configuration
    Config {
        /// Number of attempts per puzzle, applied from the next day
        #[arg(short, long)]
        attempts: Option<usize>,

        /// Use the orange/blue palette
        #[arg(long)]
        high_contrast: Option<bool>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let store = JsonStore::new(cli.data_dir.clone().unwrap_or_else(JsonStore::default_dir));
    log::debug!("data directory: {}", store.root().display());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Config {
        attempts,
        high_contrast,
    } = command
    {
        return run_config_command(store, attempts, high_contrast);
    }

    let today = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let words = load_words(cli.wordlist.as_deref())?;
    log::debug!(
        "{} secret words, {} accepted guesses",
        words.answer_count(),
        words.dictionary_size()
    );
    let mut manager = SessionManager::open(words, store, today)
        .with_context(|| format!("cannot open the puzzle of {today}"))?;

    match command {
        Commands::Play => run_play_command(manager),
        Commands::Simple => run_simple(&mut manager),
        Commands::Stats => {
            run_stats(&manager);
            Ok(())
        }
        Commands::Show => {
            run_show(&manager);
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    }
}

/// Built-in lists, or secrets from a custom file
fn load_words(wordlist: Option<&Path>) -> Result<DailyWordSource> {
    match wordlist {
        Some(path) => DailyWordSource::from_answers_file(path)
            .with_context(|| format!("cannot load word list {}", path.display())),
        None => DailyWordSource::embedded().context("built-in word list is empty"),
    }
}

fn run_config_command(
    mut store: JsonStore,
    attempts: Option<usize>,
    high_contrast: Option<bool>,
) -> Result<()> {
    let update = ConfigUpdate {
        attempt_limit: attempts,
        high_contrast,
    };
    let config = update_config(&mut store, update).context("cannot save configuration")?;
    print_config(&config);
    Ok(())
}

fn run_play_command(manager: SessionManager<DailyWordSource, JsonStore>) -> Result<()> {
    use daily_word::interactive::{App, run_tui};

    let app = App::new(manager);
    run_tui(app)
}
