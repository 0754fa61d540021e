use csv_localization_gen::utils::config::DEFAULT_CONFIG_PATH;
use csv_localization_gen::{check_localization, generate_localization, AppConfig};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage: csv-localization-gen [--config <path>] [--strict] [--check] [INPUT_CSV] [OUTPUT_CS]";

#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    strict: bool,
    check: bool,
    help: bool,
    positional: Vec<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("--strict") => cli.strict = true,
            Some("--check") => cli.check = true,
            Some("-h") | Some("--help") => cli.help = true,
            Some("--config") => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path\n{}", USAGE))?;
                cli.config_path = Some(PathBuf::from(path));
            }
            Some(flag) if flag.starts_with("--") => {
                anyhow::bail!("Unknown option {}\n{}", flag, USAGE)
            }
            _ => cli.positional.push(PathBuf::from(arg)),
        }
    }

    Ok(cli)
}

fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let directive = format!("csv_localization_gen={}", config.logging.level);
    let json = config.logging.format == "json";

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = parse_args(env::args_os().skip(1))?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = match &cli.config_path {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(Some(Path::new(DEFAULT_CONFIG_PATH)))?,
    };
    if let Some(input) = cli.positional.first() {
        config.generator.input_path = input.clone();
    }
    if let Some(output) = cli.positional.get(1) {
        config.generator.output_path = output.clone();
    }
    config.generator.strict |= cli.strict;

    init_logging(&config)?;
    tracing::debug!(?config, "Loaded configuration");

    let input = config.generator.input_path.clone();
    let output = config.generator.output_path.clone();

    if cli.check {
        let report = check_localization(&input, &output, &config)?;
        println!(
            "{} is up to date with {} entries",
            report.output_path.display(),
            report.entries
        );
        return Ok(());
    }

    let report = generate_localization(&input, &output, &config)?;
    println!("{}", report.summary());

    Ok(())
}
