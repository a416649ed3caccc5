//! Preview binary: prints generated practice items or checks one answer.
//!
//! Usage:
//!   drill generate <number|time|direction|length> [options]
//!       --locale <code>       Locale (defaults to DRILL_DEFAULT_LOCALE)
//!       --count <n>           Number of items (default 5)
//!       --min <n> --max <n>   Range for number/length items (default 1..100)
//!       --subtypes <a,b>      Time: year,month,day,weekday,fullDate
//!                             Direction: cardinal,relative,spatial
//!       --units <a,b>         Length units: mm,cm,m,km,in,ft,yd,mi
//!       --seed <n>            Reproducible output
//!   drill check <answer> (--accept <a|b|c> | --length <value:unit>) [options]
//!       --locale <code>
//!       --direction           Use the direction fuzzy threshold
//!       --strict              Keep punctuation, no fuzzy matching
//!   drill locales
//!
//! Optional environment variables:
//! - DRILL_FUZZY_THRESHOLD (defaults to 0.8)
//! - DRILL_DIRECTION_FUZZY_THRESHOLD (defaults to 0.7)
//! - DRILL_LENGTH_TOLERANCE (defaults to each locale's tolerance)
//! - DRILL_DEFAULT_LOCALE (defaults to en-US)

use anyhow::{bail, Context, Result};
use dictation_drill::config::DrillConfig;
use dictation_drill::content::{GenerateRequest, Generator, TimeKind, ValueRange};
use dictation_drill::formatter::Formatter;
use dictation_drill::locale::{DirectionKind, LengthUnit, LocaleRegistry};
use dictation_drill::validation::{ValidationOptions, Validator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dictation_drill=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DrillConfig::from_env()?;
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("generate") => generate(&config, &args[2..]),
        Some("check") => check(&config, &args[2..]),
        Some("locales") => {
            for locale in LocaleRegistry::get().list_all() {
                println!("{}\t{}\t{}", locale.code, locale.name, locale.native_name);
            }
            Ok(())
        }
        _ => {
            eprintln!("Usage: drill <generate|check|locales> [options]");
            std::process::exit(2);
        }
    }
}

/// Value following `--name`, if present.
fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|arg| arg == name)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> Result<T> {
    match flag(args, name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("{} expects a number, got '{}'", name, raw)),
        None => Ok(default),
    }
}

/// Parse a comma-separated list of serde names ("fullDate", "km").
fn parse_list<T: DeserializeOwned>(raw: Option<&str>) -> Result<Vec<T>> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            serde_json::from_value(serde_json::Value::String(name.to_string()))
                .with_context(|| format!("Unknown value '{}'", name))
        })
        .collect()
}

fn generate(config: &DrillConfig, args: &[String]) -> Result<()> {
    let category = args
        .first()
        .context("Missing category (number, time, direction, length)")?;
    let locale = flag(args, "--locale").unwrap_or(config.default_locale.as_str());
    let count: usize = parse_flag(args, "--count", 5)?;
    let range = ValueRange {
        min: parse_flag(args, "--min", 1)?,
        max: parse_flag(args, "--max", 100)?,
    };

    let request = match category.as_str() {
        "number" => GenerateRequest::Number { range },
        "time" => {
            let mut subtypes: Vec<TimeKind> = parse_list(flag(args, "--subtypes"))?;
            if subtypes.is_empty() {
                subtypes = TimeKind::ALL.to_vec();
            }
            GenerateRequest::Time { subtypes }
        }
        "direction" => {
            let mut subtypes: Vec<DirectionKind> = parse_list(flag(args, "--subtypes"))?;
            if subtypes.is_empty() {
                subtypes = DirectionKind::ALL.to_vec();
            }
            GenerateRequest::Direction { subtypes }
        }
        "length" => GenerateRequest::Length {
            range,
            units: parse_list::<LengthUnit>(flag(args, "--units"))?,
        },
        other => bail!("Unknown category '{}'", other),
    };

    let mut rng = match flag(args, "--seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().context("--seed expects an integer")?),
        None => StdRng::from_entropy(),
    };

    let items = Generator::global().generate(&request, count, locale, &mut rng)?;
    info!("Generated {} {} item(s) for {}", items.len(), category, locale);

    let formatter = Formatter::global();
    for item in &items {
        let speech = formatter.format(item, locale);
        let line = serde_json::json!({ "item": item, "speech": speech });
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

fn check(config: &DrillConfig, args: &[String]) -> Result<()> {
    let answer = args.first().context("Missing answer to check")?;
    let locale = flag(args, "--locale").unwrap_or(config.default_locale.as_str());

    let mut options = if has_flag(args, "--direction") {
        ValidationOptions::for_direction(config)
    } else {
        ValidationOptions::from_config(config)
    };
    options.strict_mode = has_flag(args, "--strict");

    let validator = Validator::global().with_length_tolerance(config.length_tolerance);

    let result = if let Some(length) = flag(args, "--length") {
        let (value, unit) = length
            .split_once(':')
            .context("--length expects <value:unit>, e.g. 5:m")?;
        let value: f64 = value.parse().context("Length value must be a number")?;
        let unit: LengthUnit = serde_json::from_value(serde_json::Value::String(unit.to_string()))
            .with_context(|| format!("Unknown unit '{}'", unit))?;
        let item = Generator::global().length_item(value, unit, locale);
        validator.validate(answer, &item, locale, &options)
    } else {
        let accepted: Vec<String> = flag(args, "--accept")
            .context("Pass --accept <a|b|c> or --length <value:unit>")?
            .split('|')
            .map(str::to_string)
            .collect();
        validator.validate(answer, &accepted, locale, &options)
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
