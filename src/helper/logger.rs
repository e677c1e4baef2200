use crate::config;
#[cfg(feature = "colored-term")]
use colored::{Color, ColoredString, Colorize};
use log::{Level, LevelFilter, Metadata, Record};
use std::env;

/// A simple [`log`] implimentation which prints the level, module path and message of each
/// record on one line.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs [`ConsoleLogger`] as the global logger. The level filter is taken from
/// [`config::ENV::LOG_LEVEL`] if set and valid, otherwise [`config::DEFAULT_LOG_LEVEL`].
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER)?;

    let level_override = env::var(config::ENV::LOG_LEVEL)
        .ok()
        .and_then(|s| parse_level_filter(&s));
    log::set_max_level(level_override.unwrap_or(config::DEFAULT_LOG_LEVEL));
    Ok(())
}

fn parse_level_filter(s: &str) -> Option<LevelFilter> {
    s.trim().parse::<LevelFilter>().ok()
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    #[cfg(feature = "colored-term")]
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // level color
            let color = match record.level() {
                Level::Error => Color::BrightRed,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Cyan,
                Level::Debug => Color::Magenta,
                Level::Trace => Color::Blue,
            };
            // log message
            let args = format!("{}", record.args());
            let args = if record.level() == Level::Error {
                // only color error message to make them stand out
                args.color(Color::Red)
            } else {
                ColoredString::from(args.as_str())
            };
            println!(
                "{} {} {} {}",
                level_str(record.level()).color(color),
                record
                    .module_path()
                    .unwrap_or("(unknown module)")
                    .color(color),
                ">".color(color),
                args,
            );
        }
    }

    #[cfg(not(feature = "colored-term"))]
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "{} {} {} {}",
                level_str(record.level()),
                record.module_path().unwrap_or("(unknown module)"),
                ">",
                record.args(),
            );
        }
    }

    fn flush(&self) {}
}

fn level_str(level: Level) -> &'static str {
    match level {
        Level::Error => "[E]",
        Level::Warn => "[W]",
        Level::Info => "[I]",
        Level::Debug => "[D]",
        Level::Trace => "[T]",
    }
}
