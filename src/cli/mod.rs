mod args;
mod config;
mod global;
mod handlers;

use classic_cipher::CipherRegistry;
use clap::{Parser, Subcommand};
use env_logger::Env;

use args::{CipherArgs, ConfigAction};
use global::GlobalArgs;
use handlers::cipher::Direction;

#[derive(Parser)]
#[command(name = "classic-cipher")]
#[command(version)]
#[command(about = "Encrypt and decrypt text with classical ciphers: Caesar, mono-alphabetic, rail fence, Hill and Playfair", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a cipher
    Encrypt(CipherArgs),

    /// Decrypt text with a cipher
    Decrypt(CipherArgs),

    /// Inspect the cipher registry
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // Unsafe: environment variable access (not thread-safe)
        // Runs before any other thread is spawned.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    init_logger(cli.global.verbose);

    // Load cipher registry with user overrides
    let registry = CipherRegistry::load_with_overrides()?;

    match cli.command {
        Commands::Encrypt(args) => {
            handlers::cipher::handle(Direction::Encrypt, args, &cli.global, &registry)
        }
        Commands::Decrypt(args) => {
            handlers::cipher::handle(Direction::Decrypt, args, &cli.global, &registry)
        }
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &registry),
    }
}

fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_level));
    if verbose > 0 {
        builder.parse_filters(default_level);
    }
    builder.format_timestamp(None).init();
}
