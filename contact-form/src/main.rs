mod paths;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use contact_form::{parse_script, ContactForm, Error, FormConfig};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Replay contact form events and print the rendered form.
#[derive(Debug, Parser)]
#[command(name = "contact-form", version)]
struct Args {
    /// Event script to replay. Reads stdin when omitted.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Form config (JSON). Defaults to config.json in the config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the submitted snapshot as JSON instead of the form.
    #[arg(long)]
    json: bool,

    /// Log level written to the log file.
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: LevelFilter) {
    let Some(path) = paths::log_file() else { return };
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(level, Config::default(), log_file);
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<FormConfig, Error> {
    if let Some(path) = explicit {
        return FormConfig::load(path);
    }
    match paths::config_file() {
        Some(path) if path.exists() => FormConfig::load(path),
        _ => Ok(FormConfig::default()),
    }
}

fn read_script(path: Option<&PathBuf>) -> Result<String, Error> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut script = String::new();
            io::stdin().read_to_string(&mut script)?;
            Ok(script)
        }
    }
}

fn run(args: &Args) -> Result<String, Error> {
    let config = load_config(args.config.as_ref())?;
    let events = parse_script(&read_script(args.script.as_ref())?)?;
    log::info!("Replaying {} event(s)", events.len());

    let mut form = ContactForm::new(config);
    for event in &events {
        log::debug!("Applying {event:?}");
        event.apply(&mut form);
    }

    if args.json {
        let mut json = serde_json::to_string_pretty(&form.submitted())?;
        json.push('\n');
        return Ok(json);
    }

    Ok(formdom::render::to_text(&form.render()))
}
