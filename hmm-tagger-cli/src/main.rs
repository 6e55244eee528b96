mod console;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hmm_tagger_core::model::fixture;
use hmm_tagger_core::{Corpus, GenerationInput, HmmModel};

#[derive(Parser, Debug)]
#[command(name = "hmm-tagger", version, about = "Part-of-speech tagging with a Hidden Markov Model")]
struct Argv {
    /// Raises the log level (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trains on one corpus and reports the accuracy on another.
    TrainEval {
        #[command(flatten)]
        train: TrainingFiles,

        /// Token file of the test corpus.
        #[arg(long)]
        test_tokens: PathBuf,

        /// Tag file of the test corpus.
        #[arg(long)]
        test_tags: PathBuf,

        /// Opens the interactive console after the report.
        #[arg(long)]
        console: bool,
    },

    /// Trains on a corpus and tags sentences typed on stdin.
    Console {
        #[command(flatten)]
        train: TrainingFiles,
    },

    /// Trains on a corpus and prints generated sentences.
    Generate {
        #[command(flatten)]
        train: TrainingFiles,

        /// Number of sentences of each kind.
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Token cap of random generation.
        #[arg(long)]
        max_length: Option<usize>,

        /// Tag that ends a randomly generated sentence.
        #[arg(long)]
        terminal_tag: Option<String>,
    },

    /// Tags sentences with the built-in hand-authored model.
    Demo {
        sentences: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct TrainingFiles {
    /// Token file of the training corpus, one sentence per line.
    #[arg(long)]
    train_tokens: PathBuf,

    /// Tag file of the training corpus, aligned with the token file.
    #[arg(long)]
    train_tags: PathBuf,
}

impl TrainingFiles {
    fn train(&self) -> hmm_tagger_core::Result<HmmModel> {
        let corpus = Corpus::from_files(&self.train_tokens, &self.train_tags)?;
        Ok(HmmModel::train(&corpus))
    }
}

const DEMO_SENTENCES: [&str; 3] = ["I fish", "One cook uses a saw", "The mine has many fish"];

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Prints `count` generated sentences. A failed sentence is logged and skipped.
fn print_sentences<W, F>(output: &mut W, kind: &str, count: usize, mut generate: F) -> io::Result<()>
where
    W: Write,
    F: FnMut() -> hmm_tagger_core::Result<String>,
{
    for i in 0..count {
        match generate() {
            Ok(sentence) => writeln!(output, "{} sentence {}: {}", kind, i + 1, sentence)?,
            Err(e) => log::warn!("{} sentence {} failed: {}", kind.to_lowercase(), i + 1, e),
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Argv::parse();
    init_logger(args.verbose);

    match args.command {
        Command::TrainEval {
            train,
            test_tokens,
            test_tags,
            console: interactive,
        } => {
            let model = train.train()?;
            let test = Corpus::from_files(&test_tokens, &test_tags)?;
            let accuracy = model.evaluate(&test)?;
            println!("{}", accuracy);

            if interactive {
                console::run(&model, io::stdin().lock(), io::stdout().lock())?;
            }
        }
        Command::Console { train } => {
            let model = train.train()?;
            console::run(&model, io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Generate {
            train,
            count,
            max_length,
            terminal_tag,
        } => {
            let model = train.train()?;

            let mut input = GenerationInput::default();
            if let Some(max_length) = max_length {
                input.set_max_length(max_length)?;
            }
            if let Some(terminal_tag) = terminal_tag {
                input.terminal_tag = terminal_tag;
            }
            let mut generator = model.generator();
            generator.set_input(input);

            let mut output = io::stdout().lock();
            print_sentences(&mut output, "Random", count, || generator.generate_random())?;
            print_sentences(&mut output, "Predictive", count, || generator.generate_predictive())?;
        }
        Command::Demo { sentences } => {
            let model = fixture::hand_coded();
            let sentences = if sentences.is_empty() {
                DEMO_SENTENCES.iter().map(|s| s.to_string()).collect()
            } else {
                sentences
            };

            for sentence in &sentences {
                println!("{}", sentence);
                println!("{}", model.tag_line(sentence)?.join(" "));
            }
        }
    }

    Ok(())
}
