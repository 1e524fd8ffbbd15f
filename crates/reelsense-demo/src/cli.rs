use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reelsense-demo")]
#[command(
    author,
    version,
    about = "Interactive movie review sentiment demo"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the demo server with the review form UI
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Word-index JSON path
        #[arg(long, default_value = "./data/imdb_word_index.json")]
        vocabulary: PathBuf,

        /// Model artifact path (lexicon fallback when omitted)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// YAML config file (takes precedence over the flags above)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a single review from the terminal without the web UI
    Score {
        /// Movie name
        #[arg(long)]
        movie: String,

        /// Word-index JSON path
        #[arg(long, default_value = "./data/imdb_word_index.json")]
        vocabulary: PathBuf,

        /// Model artifact path (lexicon fallback when omitted)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,

        /// Review text
        review: String,
    },
}
