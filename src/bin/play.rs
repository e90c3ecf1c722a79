//! Interactive terminal front end for the guessing game.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use semantle::{Engine, GameError, Word2vecModel};

/// Play the semantic word-guessing game in the terminal.
///
/// A bare word is a guess; `:hint`, `:history`, `:giveup`, `:new` and
/// `:quit` are commands.
#[derive(Parser)]
struct Args {
    /// Path to a word2vec text-format embedding table
    #[arg(env = "WORD2VEC_MODEL_PATH")]
    model: PathBuf,
    /// Seed for reproducible target and hint selection
    #[arg(long)]
    seed: Option<u64>,
    /// Emit outcomes as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut engine = Engine::new(Word2vecModel::new(&args.model));
    if let Some(seed) = args.seed {
        engine.seed_rng(seed);
    }

    eprintln!("Loading embedding table from {} ...", args.model.display());
    let candidates = engine.load_model()?;

    let started = engine.start_new_game()?;
    emit(args.json, &started, || {
        format!(
            "New game started ({candidates} candidate words). {}",
            started.message
        )
    });

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            ":quit" | ":q" => break,
            ":new" => match engine.start_new_game() {
                Ok(r) => emit(args.json, &r, || {
                    format!("New game started ({} candidate words).", r.total_words)
                }),
                Err(e) => report(args.json, &e),
            },
            ":hint" => match engine.hint() {
                Ok(h) => emit(args.json, &h, || format!("Hint: {}", h.hint)),
                Err(e) => report(args.json, &e),
            },
            ":history" => {
                let history = engine.history();
                emit(args.json, &history, || {
                    history
                        .iter()
                        .enumerate()
                        .map(|(i, g)| format!("{:>3}. {}  {:.2}", i + 1, g.word, g.similarity))
                        .collect::<Vec<_>>()
                        .join("\n")
                });
            }
            ":giveup" => match engine.give_up() {
                Ok(s) => emit(args.json, &s, || {
                    format!(
                        "The word was '{}' ({} attempts). :new starts another game.",
                        s.target_word, s.attempts
                    )
                }),
                Err(e) => report(args.json, &e),
            },
            word => match engine.guess(word) {
                Ok(g) if g.won => emit(args.json, &g, || {
                    format!("Correct! '{}' in {} attempts.", g.word, g.attempts)
                }),
                Ok(g) => emit(args.json, &g, || {
                    format!(
                        "{}  {:.2}  (rank {} of {})",
                        g.word, g.similarity, g.rank, g.attempts
                    )
                }),
                Err(e) => report(args.json, &e),
            },
        }
    }
    Ok(())
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) {
    if json {
        match serde_json::to_string(value) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("serialization failed: {e}"),
        }
    } else {
        println!("{}", text());
    }
}

fn report(json: bool, err: &GameError) {
    if json {
        match serde_json::to_string(&serde_json::json!({ "error": err.to_string() })) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("serialization failed: {e}"),
        }
    } else {
        println!("{err}");
    }
}
