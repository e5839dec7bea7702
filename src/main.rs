use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use config::{Config, ConfigError};
use fetch_headers::{HeaderError, Headers};
use log::*;

mod settings;

use settings::{Format, Settings};

#[derive(Debug)]
enum RunError {
    Config(ConfigError),
    Io(io::Error),
    Header(HeaderError),
    Json(serde_json::Error)
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            RunError::Config(err) => write!(f, "error with config: '{}'", err),
            RunError::Io(err)     => write!(f, "error with input: '{}'", err),
            RunError::Header(err) => write!(f, "error with headers: '{}'", err),
            RunError::Json(err)   => write!(f, "error writing json: '{}'", err)
        }
    }
}

impl std::error::Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(err: ConfigError) -> Self {
        RunError::Config(err)
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::Io(err)
    }
}

impl From<HeaderError> for RunError {
    fn from(err: HeaderError) -> Self {
        RunError::Header(err)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(err: serde_json::Error) -> Self {
        RunError::Json(err)
    }
}

/// Defaults, then `fetch-headers.yml` if present, then `HDRS_*`
/// variables, then `arg` as the input path.
fn load_settings(arg: Option<String>) -> Result<Settings, ConfigError> {
    let mut conf = Config::default();
    conf.set_default("input", "-")?;
    conf.set_default("format", "json")?;
    conf.set_default("pretty", true)?;

    conf
        .merge(config::File::with_name("fetch-headers").required(false))?
        .merge(config::Environment::with_prefix("HDRS"))?;

    if let Some(input) = arg {
        conf.set("input", input)?;
    }

    let settings: Settings = conf.try_into()?;
    debug!("initialized with settings: \n{:#?}\n", settings);

    Ok(settings)
}

fn read_input(settings: &Settings) -> io::Result<String> {
    match &settings.input {
        Some(path) => {
            trace!("reading headers from '{}'", path.display());
            fs::read_to_string(path)
        },
        None => {
            trace!("reading headers from stdin");
            let mut buff = String::new();
            io::stdin().read_to_string(&mut buff)?;
            Ok(buff)
        }
    }
}

fn render(headers: &Headers, settings: &Settings, out: &mut dyn Write) -> Result<(), RunError> {
    match settings.format {
        Format::Json => {
            let json: BTreeMap<_, _> = headers.to_json()
                .into_iter()
                .collect();

            if settings.pretty {
                serde_json::to_writer_pretty(&mut *out, &json)?;
            }else{
                serde_json::to_writer(&mut *out, &json)?;
            }
            writeln!(out)?;
        },
        Format::Entries => {
            for (name, value) in headers.entries() {
                writeln!(out, "{}: {}", name, value)?;
            }
        },
        Format::Wire => {
            write!(out, "{}", headers)?;
        }
    }

    Ok(())
}

fn run() -> Result<(), RunError> {
    let settings = load_settings(std::env::args().nth(1))?;

    let input = read_input(&settings)?;
    let headers: Headers = input.parse()?;
    info!(
        "parsed {} header line(s) into {} entries",
        headers.len(),
        headers.count()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&headers, &settings, &mut out)?;
    out.flush()?;

    Ok(())
}

fn main() {
    pretty_env_logger::init_custom_env("HDRS_LOG");

    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}
