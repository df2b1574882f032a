//! Kwatt CLI - Formatting and validation tools.
//!
//! # Usage
//!
//! ```bash
//! # Check whether a phone number is a valid Cameroonian number
//! kwatt-cli phone check "+237 612 345 678"
//!
//! # Format a phone number for display
//! kwatt-cli phone format 237612345678
//!
//! # Format an FCFA amount
//! kwatt-cli money format 150000 --locale en
//!
//! # Format dates and times (epoch milliseconds or RFC 3339)
//! kwatt-cli date format 2024-05-01T12:00:00Z --locale fr --style medium
//! kwatt-cli time format 1714564800000 --locale en
//!
//! # Relative age of an instant
//! kwatt-cli age 1714564800000
//! ```
//!
//! # Commands
//!
//! - `phone` - Validate and format Cameroonian phone numbers
//! - `money` - Format FCFA amounts with locale grouping
//! - `date` / `time` - Locale-aware date and time rendering
//! - `age` - Coarse "time ago" string for an instant

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use kwatt_core::Locale;

mod commands;

#[derive(Parser)]
#[command(name = "kwatt-cli")]
#[command(author, version, about = "Kwatt formatting and validation tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and format Cameroonian phone numbers
    Phone {
        #[command(subcommand)]
        action: PhoneAction,
    },
    /// Format FCFA amounts
    Money {
        #[command(subcommand)]
        action: MoneyAction,
    },
    /// Format calendar dates
    Date {
        #[command(subcommand)]
        action: DateAction,
    },
    /// Format times of day
    Time {
        #[command(subcommand)]
        action: TimeAction,
    },
    /// Show how long ago an instant was
    Age {
        /// Epoch milliseconds or an RFC 3339 timestamp
        value: String,
    },
}

#[derive(Subcommand)]
enum PhoneAction {
    /// Check validity; exits nonzero for an invalid number
    Check {
        /// Phone number, with or without the +237 country code
        number: String,
    },
    /// Best-effort display formatting
    Format {
        /// Phone number, with or without the +237 country code
        number: String,
    },
}

#[derive(Subcommand)]
enum MoneyAction {
    /// Format an amount as grouped FCFA
    Format {
        /// Amount in francs (decimals are rounded to whole francs)
        amount: String,

        /// Locale for digit grouping (`fr`, `en`)
        #[arg(short, long, default_value = "fr")]
        locale: Locale,
    },
}

#[derive(Subcommand)]
enum DateAction {
    /// Format an instant as a date
    Format {
        /// Epoch milliseconds or an RFC 3339 timestamp
        value: String,

        /// Locale (`fr`, `en`)
        #[arg(short, long, default_value = "fr")]
        locale: Locale,

        /// Detail level (`short`, `medium`)
        #[arg(short, long, default_value = "short")]
        style: String,
    },
}

#[derive(Subcommand)]
enum TimeAction {
    /// Format an instant as a time of day
    Format {
        /// Epoch milliseconds or an RFC 3339 timestamp
        value: String,

        /// Locale (`fr`, `en`)
        #[arg(short, long, default_value = "fr")]
        locale: Locale,

        /// Detail level (`short`, `medium`)
        #[arg(short, long, default_value = "short")]
        style: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Phone { action } => match action {
            PhoneAction::Check { number } => commands::phone::check(&number)?,
            PhoneAction::Format { number } => commands::phone::format(&number),
        },
        Commands::Money { action } => match action {
            MoneyAction::Format { amount, locale } => {
                commands::money::format(&amount, locale)?;
            }
        },
        Commands::Date { action } => match action {
            DateAction::Format {
                value,
                locale,
                style,
            } => commands::datetime::date(&value, locale, &style)?,
        },
        Commands::Time { action } => match action {
            TimeAction::Format {
                value,
                locale,
                style,
            } => commands::datetime::time(&value, locale, &style)?,
        },
        Commands::Age { value } => commands::datetime::age(&value)?,
    }
    Ok(())
}
