use crate::cli::{args::ConfigAction, global::GlobalArgs};
use classic_cipher::{Algorithm, CipherRegistry};

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    registry: &CipherRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, registry),
        ConfigAction::Show { cipher } => handle_show(&cipher, registry),
    }
}

fn handle_list(json: bool, registry: &CipherRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = registry.names();

    // JSON output
    if json {
        let ciphers: Vec<_> = names
            .iter()
            .filter_map(|name| registry.get_cipher(name).map(|entry| (name, entry)))
            .map(|(name, entry)| {
                serde_json::json!({
                    "name": name,
                    "algorithm": entry.algorithm,
                    "description": entry.description,
                    "key_hint": entry.key_hint,
                    "has_key": entry.key.is_some(),
                })
            })
            .collect();
        let algorithms: Vec<&str> = Algorithm::all().iter().map(|a| a.as_str()).collect();
        let output = serde_json::json!({
            "ciphers": ciphers,
            "algorithms": algorithms,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available ciphers:\n");
    for name in &names {
        if let Some(entry) = registry.get_cipher(name) {
            let stored = if entry.key.is_some() { "  [key stored]" } else { "" };
            println!("  {:<12} {:<24}{}", name, entry.algorithm, stored);
        }
    }
    println!("\nUse 'config show <cipher>' for key format details");

    Ok(())
}

fn handle_show(name: &str, registry: &CipherRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let (algorithm, entry) = registry.resolve(name)?;

    println!("Cipher: {}", name);
    println!("  Algorithm: {}", algorithm);

    match entry {
        Some(entry) => {
            if !entry.description.is_empty() {
                println!("  Description: {}", entry.description);
            }
            if !entry.key_hint.is_empty() {
                println!("  Key: {}", entry.key_hint);
            }
            println!(
                "  Stored key: {}",
                if entry.key.is_some() { "yes" } else { "no" }
            );
        }
        None => println!("  (no registry entry)"),
    }

    Ok(())
}
