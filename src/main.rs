//! Spelling Bee CLI
//!
//! Command-line front end for picking puzzles and listing their answers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spelling_bee::letters::parse_prime;
use spelling_bee::{
    answer_line, censor, LoaderConfig, PuzzleIndex, DEFAULT_DICTIONARY_PATH, DEFAULT_HEADER_LINES,
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "spelling-bee")]
#[command(about = "Generate and solve Spelling Bee letter puzzles")]
#[command(version)]
struct Cli {
    /// Dictionary listing (word followed by its definition on each line)
    #[arg(
        long,
        global = true,
        env = "SPELLING_BEE_DICTIONARY",
        default_value = DEFAULT_DICTIONARY_PATH
    )]
    dictionary: PathBuf,

    /// Header lines to skip at the top of the dictionary
    #[arg(long, global = true, default_value_t = DEFAULT_HEADER_LINES)]
    header_lines: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random letter set that has at least one pangram
    Pick {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the pangrams of a letter set
    Pangrams {
        /// Seven letters, e.g. DUNORCT
        letters: String,
        /// Only words using each letter exactly once
        #[arg(long)]
        perfect: bool,
    },
    /// List every valid word for a letter set and prime letter
    Words {
        letters: String,
        /// Letter every answer must contain
        prime: String,
        /// Mask the words in the output
        #[arg(long)]
        censor: bool,
    },
    /// Print the definition of a word
    Define {
        word: String,
        /// Mask uppercase words inside the definition
        #[arg(long)]
        censor: bool,
    },
    /// Summarize every pangram letter set
    Survey {
        /// Only show this many letter sets, richest first
        #[arg(long)]
        top: Option<usize>,
    },
    /// Pick a letter set and print its pangrams
    Demo {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn mask(text: &str, masked: bool) -> String {
    if masked {
        censor(text)
    } else {
        text.to_string()
    }
}

fn print_words<'a>(words: impl IntoIterator<Item = &'a String>) {
    for word in words {
        println!("{} [{}]", word, word.len());
    }
}

fn print_defined_words<'a>(
    index: &PuzzleIndex,
    words: impl IntoIterator<Item = &'a String>,
    masked: bool,
) -> spelling_bee::Result<()> {
    for word in words {
        println!("{}", answer_line(word, index.definition(word)?, masked));
    }
    Ok(())
}

fn run(cli: Cli) -> spelling_bee::Result<()> {
    let config = LoaderConfig::new().with_header_lines(cli.header_lines);
    let mut index = PuzzleIndex::load_with(&cli.dictionary, &config)?;

    match cli.command {
        Commands::Pick { seed } => {
            println!("{}", index.pick_letter_set_with(&mut rng_for(seed))?);
        }
        Commands::Pangrams { letters, perfect } => {
            let pangrams = index.pangrams(&letters, perfect)?;
            if pangrams.is_empty() {
                println!("No {}Pangram", if perfect { "Perfect " } else { "" });
            }
            print_words(&pangrams);
        }
        Commands::Words {
            letters,
            prime,
            censor,
        } => {
            let prime = parse_prime(&prime)?;
            let words = index.valid_words(&letters, prime)?;
            println!("{} words", words.len());
            print_defined_words(&index, words.iter(), censor)?;
        }
        Commands::Define { word, censor } => {
            println!("{}", mask(index.definition(&word)?, censor));
        }
        Commands::Survey { top } => {
            let mut summaries = index.survey();
            summaries.sort_by(|a, b| {
                b.perfect_pangrams
                    .cmp(&a.perfect_pangrams)
                    .then(b.pangrams.cmp(&a.pangrams))
                    .then(a.letters.cmp(&b.letters))
            });
            if let Some(top) = top {
                summaries.truncate(top);
            }

            println!("{:>8} {:>9} {:>8} {:>12}", "Letters", "Pangrams", "Perfect", "Best prime");
            println!("{}", "-".repeat(40));
            for summary in &summaries {
                let best = summary
                    .richest_prime()
                    .map(|(c, n)| format!("{} ({})", c, n))
                    .unwrap_or_default();
                println!(
                    "{:>8} {:>9} {:>8} {:>12}",
                    summary.letters, summary.pangrams, summary.perfect_pangrams, best
                );
            }
        }
        Commands::Demo { seed } => {
            let letters = index.pick_letter_set_with(&mut rng_for(seed))?;
            println!("{}", letters);

            let pangrams = index.pangrams(&letters, false)?;
            println!("{:?}", pangrams);

            let perfect = index.pangrams(&letters, true)?;
            if perfect.is_empty() {
                println!("No Perfect Pangram");
            } else {
                println!("{:?}", perfect);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
