//! wordnet CLI: semantic distance, common ancestors and outcasts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use wordnet_sap::config::WordNetConfig;
use wordnet_sap::graph::SearchStrategy;
use wordnet_sap::outcast::Outcast;
use wordnet_sap::wordnet::WordNet;

#[derive(Parser)]
#[command(
    name = "wordnet",
    version,
    about = "Shortest ancestral path queries over a WordNet corpus"
)]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Synset file (`id,synonyms,gloss` per line). Overrides the config.
    #[arg(long, global = true)]
    synsets: Option<PathBuf>,

    /// Hypernym file (`id,parent,...` per line). Overrides the config.
    #[arg(long, global = true)]
    hypernyms: Option<PathBuf>,

    /// Run every ancestral path search to exhaustion.
    #[arg(long, global = true)]
    exhaustive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show corpus statistics.
    Info {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List every noun in sorted order.
    Nouns {
        /// Print as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Check whether a word is a noun of the corpus.
    IsNoun {
        word: String,
    },

    /// Semantic distance between two nouns.
    Distance {
        noun_a: String,
        noun_b: String,
    },

    /// Common ancestor synset on a shortest ancestral path.
    Sap {
        noun_a: String,
        noun_b: String,
    },

    /// Pick the noun least related to the others.
    Outcast {
        /// Read whitespace-separated nouns from a file.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the outcast and every score as JSON.
        #[arg(long)]
        json: bool,

        /// Candidate nouns.
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WordNetConfig::load(path)?,
        None => WordNetConfig::default(),
    };
    if cli.exhaustive {
        config.search = SearchStrategy::Exhaustive;
    }
    let synsets = cli.synsets.or_else(|| config.synsets.clone()).ok_or_else(|| {
        miette::miette!(
            help = "Pass --synsets or set `synsets` in the config file.",
            "no synset file given"
        )
    })?;
    let hypernyms = cli
        .hypernyms
        .or_else(|| config.hypernyms.clone())
        .ok_or_else(|| {
            miette::miette!(
                help = "Pass --hypernyms or set `hypernyms` in the config file.",
                "no hypernym file given"
            )
        })?;

    let wordnet = WordNet::from_files(&synsets, &hypernyms, &config)?;

    match cli.command {
        Commands::Info { json } => {
            let info = wordnet.info();
            if json {
                println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);
            } else {
                println!("{info}");
            }
        }

        Commands::Nouns { json } => {
            if json {
                let nouns: Vec<&str> = wordnet.nouns().collect();
                println!("{}", serde_json::to_string_pretty(&nouns).into_diagnostic()?);
            } else {
                for noun in wordnet.nouns() {
                    println!("{noun}");
                }
            }
        }

        Commands::IsNoun { word } => {
            println!("{}", wordnet.is_noun(&word));
        }

        Commands::Distance { noun_a, noun_b } => {
            match wordnet.distance(&noun_a, &noun_b)? {
                Some(d) => println!("{d}"),
                None => println!("no common ancestor"),
            }
        }

        Commands::Sap { noun_a, noun_b } => {
            match wordnet.ancestral_path(&noun_a, &noun_b)? {
                Some(path) => {
                    println!("{}", path.synset);
                    println!("  length:    {}", path.length);
                    println!("  synset id: {}", path.ancestor);
                }
                None => println!("no common ancestor"),
            }
        }

        Commands::Outcast { file, json, words } => {
            let mut candidates = Vec::new();
            if let Some(path) = file {
                let content = std::fs::read_to_string(&path).into_diagnostic()?;
                candidates.extend(content.split_whitespace().map(str::to_string));
            }
            candidates.extend(words);

            let outcast = Outcast::new(&wordnet);
            if json {
                let scores = outcast.scores(&candidates)?;
                let winner = outcast.outcast(&candidates)?;
                let report = serde_json::json!({ "outcast": winner, "scores": scores });
                println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
            } else {
                println!("{}", outcast.outcast(&candidates)?);
            }
        }
    }

    Ok(())
}
