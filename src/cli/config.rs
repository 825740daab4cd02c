use classic_cipher::CipherConfig;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::{args::CipherArgs, global::GlobalArgs};

/// Picks the key from `--key`, then `--key-file`, then the registry entry.
pub fn resolve_key(
    args: &CipherArgs,
    entry: Option<&CipherConfig>,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(key) = &args.key {
        return Ok(key.clone());
    }

    if let Some(path) = &args.key_file {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .map_err(|e| format!("Cannot read key file '{}': {}", path, e))?;
        let key = content.lines().next().unwrap_or("").to_string();
        if key.is_empty() {
            return Err(format!("Key file '{}' is empty", path).into());
        }
        log::debug!("using key from {}", path);
        return Ok(key);
    }

    match entry.and_then(|entry| entry.key.as_deref()) {
        Some(key) if !key.is_empty() => {
            log::debug!("using key stored in cipher registry");
            Ok(key.to_string())
        }
        _ => Err("No key provided. Use --key, --key-file, or set `key` in ciphers.toml".into()),
    }
}

/// Reads the input text from a file or stdin, honouring `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let metadata = fs::metadata(file_path)?;
            let file_size = metadata.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    if !global.quiet {
                        eprintln!(
                            "Warning: Processing large file ({} bytes, limit: {} bytes)",
                            file_size, global.max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        return fs::read_to_string(file_path)
            .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e).into());
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    // Check stdin size after reading
    if global.max_size > 0 && buffer.len() > global.max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Pass a file with --force for large inputs.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

/// Drops a single trailing `\n` or `\r\n`.
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// Writes `result` to `--output`, back to the input file, or to stdout.
pub fn write_output(args: &CipherArgs, result: &str) -> Result<(), Box<dyn std::error::Error>> {
    let target: Option<&Path> = if args.in_place {
        args.file.as_deref()
    } else {
        args.output.as_deref()
    };

    match target {
        Some(path) => {
            fs::write(path, result)?;
            log::info!("wrote {} bytes to {}", result.len(), path.display());
        }
        None => println!("{}", result),
    }
    Ok(())
}
