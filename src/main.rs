use colored::Colorize;
use flagslice::{command_line, error::Error as FlagError, Strings};
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config as SLConfig, TermLogger, TerminalMode};
use std::error::Error;

/// Settings for this program, read out of the parsed flags
#[derive(Debug, Clone, PartialEq, Eq)]
struct Config {
    /// how much to log; the last -log wins
    log_level: LevelFilter,
    /// every -s, in order
    values: Vec<String>,
}

impl Config {
    fn new(log_levels: &Strings, values: &Strings) -> Result<Config, FlagError> {
        // -log is repeatable like any other flag here; only the last one counts
        let level = log_levels.values().pop().unwrap_or_default();
        let log_level = level.parse::<LevelFilter>().map_err(|_| FlagError::InvalidValue {
            name: "log".into(),
            value: level.clone(),
            reason: "expected one of off, error, warn, info, debug, trace".into(),
        })?;

        Ok(Config {
            log_level,
            values: values.values(),
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let values = command_line::string("s", Some(&["foo", "bar"][..]), "A repeatable string")?;
    let log_levels = command_line::string(
        "log",
        Some(&["warn"][..]),
        "Log level: off, error, warn, info, debug or trace",
    )?;
    command_line::parse()?;

    let config = Config::new(&log_levels, &values)?;
    TermLogger::init(
        config.log_level,
        SLConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    debug!("{:?}", config);

    for (i, value) in config.values.iter().enumerate() {
        println!("{}: {}", i.to_string().bright_yellow(), value);
    }

    let rest = command_line::args();
    if !rest.is_empty() {
        info!("{} operand(s) after the flags", rest.len());
        println!("{} {}", "operands:".bright_red(), rest.join(" "));
    }

    Ok(())
}
