use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use dash_config::document::{self, DocumentFormat, SchemaKind};
use dash_config::{
    validate, validate_against, LegacyDocument, MigrationConfig, Migrator, StatusPolicy,
    UpgradeOutcome,
};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let input = Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Configuration document to read (.json, .yaml, .yml)");

    Command::new("dash-migrate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Upgrade dashboard configuration documents to the current schema")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("migrate")
                .about("Migrate a legacy document; current documents pass through unchanged")
                .arg(input.clone())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Where to write the result (default: stdout)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["json", "yaml"])
                        .help("Output format (default: output extension, then input format)"),
                )
                .arg(
                    Arg::new("status-policy")
                        .long("status-policy")
                        .value_parser(["preserve", "drop", "reject"])
                        .help("Handling of non-numeric status codes"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML migration configuration"),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .action(ArgAction::SetTrue)
                        .help("Validate document invariants before writing"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Report the schema and size of a document")
                .arg(input.clone()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check the invariants of a current-schema document")
                .arg(input),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let matches = cli().get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("migrate", args)) => run_migrate(args),
        Some(("inspect", args)) => run_inspect(args),
        Some(("validate", args)) => run_validate(args),
        _ => bail!("unknown command"),
    }
}

fn input_path(args: &ArgMatches) -> Result<&PathBuf> {
    args.get_one::<PathBuf>("input")
        .context("--input is required")
}

fn read_input(path: &Path) -> Result<(String, DocumentFormat)> {
    let format = DocumentFormat::from_path(path)
        .with_context(|| format!("cannot tell the format of {}", path.display()))?;
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok((raw, format))
}

fn load_config(args: &ArgMatches) -> Result<MigrationConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            MigrationConfig::from_toml_str(&raw)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => MigrationConfig::default(),
    };

    if let Some(policy) = args.get_one::<String>("status-policy") {
        config.status_policy = policy.parse::<StatusPolicy>()?;
    }
    Ok(config)
}

fn run_migrate(args: &ArgMatches) -> Result<ExitCode> {
    let input = input_path(args)?;
    let (raw, input_format) = read_input(input)?;
    let output = args.get_one::<PathBuf>("output");

    let output_format = match args.get_one::<String>("format") {
        Some(f) => f.parse::<DocumentFormat>()?,
        None => output
            .and_then(|p| DocumentFormat::from_path(p))
            .unwrap_or(input_format),
    };

    let config = load_config(args)?;
    tracing::debug!(policy = %config.status_policy, "loaded migration configuration");
    let migrator = Migrator::new().with_config(config);

    let outcome = document::upgrade_str(&raw, input_format, &migrator)
        .with_context(|| format!("upgrading {}", input.display()))?;

    if args.get_flag("check") {
        let result = match &outcome {
            UpgradeOutcome::Migrated(doc) => {
                let legacy = legacy_from(&raw, input_format)?;
                validate_against(&legacy, doc)
            }
            UpgradeOutcome::AlreadyCurrent(doc) => validate(doc),
        };
        if let Err(violations) = result {
            for v in &violations {
                tracing::error!("{v}");
            }
            return Ok(ExitCode::FAILURE);
        }
    }

    match &outcome {
        UpgradeOutcome::Migrated(doc) => tracing::info!(
            apps = doc.apps.len(),
            categories = doc.categories.len(),
            "migrated {}",
            input.display()
        ),
        UpgradeOutcome::AlreadyCurrent(_) => {
            tracing::info!("{} already uses the current schema", input.display());
        }
    }

    let rendered = document::to_string(outcome.document(), output_format)?;
    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn legacy_from(raw: &str, format: DocumentFormat) -> Result<LegacyDocument> {
    let value = document::parse_value(raw, format)?;
    Ok(document::legacy_from_value(value)?)
}

fn run_inspect(args: &ArgMatches) -> Result<ExitCode> {
    let input = input_path(args)?;
    let (raw, format) = read_input(input)?;
    let value = document::parse_value(&raw, format)?;

    match document::detect_schema(&value)? {
        SchemaKind::Legacy => {
            let legacy = document::legacy_from_value(value)?;
            println!("schema: legacy");
            println!("name: {}", legacy.name.as_deref().unwrap_or("(none)"));
            println!("services: {}", legacy.services.len());
        }
        SchemaKind::Current(version) => {
            println!("schema: {version}");
            if version == dash_config::SCHEMA_VERSION {
                let doc = document::load_current(&raw, format)?;
                println!("name: {}", doc.name());
                println!("apps: {}", doc.apps.len());
                println!("categories: {}", doc.categories.len());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_validate(args: &ArgMatches) -> Result<ExitCode> {
    let input = input_path(args)?;
    let (raw, format) = read_input(input)?;
    let doc = document::load_current(&raw, format)
        .with_context(|| format!("loading {}", input.display()))?;

    match validate(&doc) {
        Ok(()) => {
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        Err(violations) => {
            for v in &violations {
                println!("{v}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
