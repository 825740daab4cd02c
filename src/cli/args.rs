use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments shared by encrypt and decrypt
#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Cipher alias from the registry or a full algorithm name
    pub cipher: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Key for the cipher
    #[arg(short = 'k', long, conflicts_with = "key_file")]
    pub key: Option<String>,

    /// Read the key from the first line of a file
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file with the result
    #[arg(short = 'i', long, requires = "file")]
    pub in_place: bool,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List registered ciphers
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific cipher
    Show {
        /// Cipher alias or algorithm name
        cipher: String,
    },
}
