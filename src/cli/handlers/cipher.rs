use crate::cli::{
    args::CipherArgs,
    config::{read_input, resolve_key, strip_line_ending, write_output},
    global::GlobalArgs,
};
use classic_cipher::{Algorithm, CipherRegistry, PLAYFAIR_PADDING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

pub fn handle(
    direction: Direction,
    args: CipherArgs,
    global: &GlobalArgs,
    registry: &CipherRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    // Step 1: Resolve cipher and key
    let (algorithm, entry) = registry.resolve(&args.cipher)?;
    let key = resolve_key(&args, entry)?;
    let cipher = algorithm.cipher(&key)?;

    // Step 2: Read input
    let input = read_input(args.file.as_ref(), global)?;
    let text = if registry.settings.strip_newline() {
        strip_line_ending(&input)
    } else {
        input.as_str()
    };

    // Step 3: Run the cipher
    log::info!("{:?} {} chars with {}", direction, text.chars().count(), algorithm);
    let result = match direction {
        Direction::Encrypt => cipher.encrypt(text)?,
        Direction::Decrypt => cipher.decrypt(text)?,
    };

    if !global.quiet
        && direction == Direction::Encrypt
        && algorithm == Algorithm::Playfair
        && text.chars().count() % 2 == 1
    {
        eprintln!(
            "Note: odd-length plaintext was padded with '{}'",
            PLAYFAIR_PADDING
        );
    }

    // Step 4: Output result
    write_output(&args, &result)
}
