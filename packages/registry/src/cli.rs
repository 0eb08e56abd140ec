//! Command-line interface for the IBAN tools.

use clap::{Parser, Subcommand};
use console::style;
use iban_core::{generate_iban, get_fields, verify_iban, Result};

use crate::storage::IbanStorage;

/// IBAN tools - generate, validate and decompose International Bank
/// Account Numbers.
#[derive(Parser)]
#[command(name = "iban")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a checksummed IBAN from a country code and account data.
    Generate {
        /// ISO-3166 alpha-2 country code (e.g. GB)
        country: String,

        /// Account data fields in country order (e.g. bank code,
        /// branch code, account number), or the full BBAN as one value
        #[arg(required = true)]
        data: Vec<String>,
    },

    /// Check an IBAN's structure and check digits.
    Validate {
        /// The IBAN to check (spaces allowed)
        iban: String,
    },

    /// Show the named fields of an IBAN.
    Fields {
        /// The IBAN to decompose (spaces allowed)
        iban: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let registry = IbanStorage::new();

    match cli.command {
        Commands::Generate { country, data } => {
            let fields: Vec<&str> = data.iter().map(String::as_str).collect();
            let iban = generate_iban(&country, fields.as_slice(), &registry)?;
            println!("{iban}");
        }
        Commands::Validate { iban } => {
            let fields = verify_iban(&iban, &registry)?;
            println!(
                "{} {} (check digits {})",
                style("Valid:").green().bold(),
                iban.replace(' ', ""),
                fields.get("check_digits").unwrap_or_default(),
            );
        }
        Commands::Fields { iban, json } => {
            let fields = get_fields(&iban, &registry)?;
            if json {
                #[allow(clippy::expect_used)] // String pairs always serialize
                let rendered =
                    serde_json::to_string_pretty(&fields).expect("serializable fields");
                println!("{rendered}");
            } else {
                for (name, value) in fields.iter() {
                    println!("{} {value}", style(format!("{name}:")).cyan());
                }
            }
        }
    }

    Ok(())
}
