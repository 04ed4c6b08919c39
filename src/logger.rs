use std::sync::atomic::{AtomicBool, Ordering};

use inksac::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: Logger = Logger;
static COLOR: AtomicBool = AtomicBool::new(false);

/// Level-tagged diagnostics on stderr, kept apart from command output.
pub struct Logger;

pub fn init(level: LevelFilter, color: bool) -> Result<(), log::SetLoggerError> {
    COLOR.store(color, Ordering::Relaxed);
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn tag(level: Level) -> (Color, char) {
    match level {
        Level::Info => (Color::Green, '*'),
        Level::Warn => (Color::Yellow, 'W'),
        Level::Error => (Color::Red, 'E'),
        Level::Debug => (Color::Cyan, 'D'),
        Level::Trace => (Color::RGB(128, 128, 128), 'T'),
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (color, ch) = tag(record.level());
        let ch = ch.to_string();
        let ch = if COLOR.load(Ordering::Relaxed) {
            ch.as_str()
                .style(Style::builder().foreground(color).bold().build())
                .to_string()
        } else {
            ch
        };
        eprintln!("[{}] {}", ch, record.args());
    }

    fn flush(&self) {}
}
