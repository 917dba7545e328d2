//! Braille-tree CLI - translate between Braille encodings and text.

use anyhow::{Context, Result};
use braille_tree::codec::{Codec, read_tokens_file};
use braille_tree::pretty::write_tree;
use braille_tree::{SymbolTree, load_definitions_file};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "braille-tree")]
#[command(about = "Translate between Braille L/R encodings and text", long_about = None)]
#[command(version)]
struct Cli {
    /// Definitions file: a count line, then `<character> <encoding>` lines
    #[arg(short, long, global = true, default_value = "braille.txt")]
    definitions: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode the token string in a translation input file
    Decode {
        /// File whose first token is the L/R string to decode
        input: PathBuf,
        #[command(flatten)]
        cell: CellArgs,
    },
    /// Decode a token string given on the command line
    DecodeStr {
        /// L/R string to decode
        tokens: String,
        #[command(flatten)]
        cell: CellArgs,
    },
    /// Encode text into a token string
    Encode {
        /// Text to encode
        text: String,
    },
    /// Print the encoding of a character
    Find {
        /// Character to look up
        character: char,
    },
    /// List all symbols whose encoding starts with a prefix
    Prefix {
        /// L/R prefix (empty for all symbols)
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Delete characters and print the resulting tree
    Delete {
        /// Characters to delete
        #[arg(required = true)]
        characters: Vec<char>,
    },
    /// Print the symbol tree
    Print,
}

#[derive(Args)]
struct CellArgs {
    /// Number of tokens per Braille cell
    #[arg(short, long, default_value_t = braille_tree::codec::DEFAULT_CELL_WIDTH)]
    cell_width: usize,
}

impl CellArgs {
    fn codec(&self) -> Result<Codec> {
        Ok(Codec::builder().with_cell_width(self.cell_width).build()?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("braille_tree=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut tree = load_definitions_file(&cli.definitions)
        .with_context(|| format!("Failed to load definitions from {}", cli.definitions.display()))?;
    info!(
        definitions = %cli.definitions.display(),
        num_symbols = tree.len(),
        depth = tree.depth(),
        "Symbol tree loaded"
    );

    match cli.command {
        Commands::Decode { input, cell } => {
            let tokens = read_tokens_file(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            println!("{}", cell.codec()?.decode(&tree, &tokens));
        }
        Commands::DecodeStr { tokens, cell } => {
            println!("{}", cell.codec()?.decode(&tree, &tokens));
        }
        Commands::Encode { text } => {
            println!("{}", Codec::new().encode(&tree, &text));
        }
        Commands::Find { character } => match tree.find_encoding(character) {
            Some(encoding) => println!("{encoding}"),
            None => println!("'{character}' has no encoding"),
        },
        Commands::Prefix { prefix } => match tree.collect_by_prefix(&prefix) {
            Some(symbols) => {
                for symbol in symbols {
                    println!("{symbol}");
                }
            }
            None => println!("No encoding starts with \"{prefix}\""),
        },
        Commands::Delete { characters } => {
            for character in characters {
                match tree.delete(character) {
                    Some(encoding) => info!(%character, %encoding, "Deleted"),
                    None => warn!(%character, "Character not in symbol tree"),
                }
            }
            print_tree(&tree)?;
        }
        Commands::Print => print_tree(&tree)?,
    }

    Ok(())
}

fn print_tree(tree: &SymbolTree) -> Result<()> {
    write_tree(std::io::stdout().lock(), tree).context("Failed to print symbol tree")
}
