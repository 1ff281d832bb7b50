use anyhow::Context;
use clap::{Parser, Subcommand};
use ordinal_engine::Encoder;

#[derive(Parser)]
#[command(name = "ordinal-vectors")]
#[command(about = "Golden vector utilities for the ordinal encoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the deterministic golden vectors as JSON.
    Vectors,

    /// Encode one value and print its hex and base-62 forms.
    Encode {
        /// Value to encode, decimal or 0x-prefixed hex.
        #[arg(long)]
        value: String,
        /// Key, taken as raw UTF-8 bytes.
        #[arg(long)]
        key: String,
    },
}

fn parse_u64(s: &str) -> anyhow::Result<u64> {
    let parsed = match s.strip_prefix("0x") {
        Some(hex_digits) => u64::from_str_radix(hex_digits, 16),
        None => s.parse(),
    };
    parsed.with_context(|| format!("invalid value: {s}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Vectors => {
            let vectors = ordinal_vectors::generate_vectors()?;
            println!("{}", serde_json::to_string_pretty(&vectors)?);
        }

        Command::Encode { value, key } => {
            let value = parse_u64(&value)?;
            let ordinal = Encoder::new().encode(value, key.as_bytes())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "value": format!("{:#018x}", value),
                    "hex": format!("0x{}", hex::encode(ordinal.as_bytes())),
                    "base62": ordinal.to_base62(),
                }))?
            );
        }
    }

    Ok(())
}
