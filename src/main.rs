use chrono::{Local, NaiveDate};
use clap::Parser;
use gestate::application::{CalculateService, ConfigService};
use gestate::cli::{format_config, format_json, format_summary, Cli, Commands};
use gestate::domain::{format_share_text, parse_date, CalculationMethod};
use gestate::error::GestateError;
use gestate::infrastructure::Config;
use gestate::logging;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), GestateError> {
    let config_path = Config::resolve_path(cli.config.as_deref());
    tracing::debug!(path = %config_path.display(), "using config file");

    match cli.command {
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(config_path);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: gestate config [--list | <key> [<value>]]");
                println!("Valid keys: method, date_format");
                Ok(())
            }
        }
        None => {
            let Some(date) = cli.date else {
                println!("gestate - Pregnancy due date and milestone calculator");
                println!("Use --help for usage information");
                return Ok(());
            };

            let config = Config::load(&config_path)?;
            let method = cli
                .method
                .as_deref()
                .map(CalculationMethod::from_str)
                .transpose()
                .map_err(GestateError::Config)?;
            let now = resolve_today(cli.today.as_deref(), &config.date_format)?;

            let calc = CalculateService::new(config).execute(method, &date, now)?;

            if cli.share {
                println!("{}", format_share_text(Some(&calc.result)));
            } else if cli.json {
                println!("{}", format_json(&calc)?);
            } else {
                print!("{}", format_summary(&calc));
            }
            Ok(())
        }
    }
}

/// The reference day: `--today` if given, otherwise the local calendar date
fn resolve_today(today: Option<&str>, date_format: &str) -> Result<NaiveDate, GestateError> {
    match today {
        Some(raw) => {
            parse_date(raw, date_format).ok_or_else(|| GestateError::InvalidDate(raw.to_string()))
        }
        None => Ok(Local::now().date_naive()),
    }
}
