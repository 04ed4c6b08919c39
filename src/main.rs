use log::LevelFilter;
use shoal::error::ShellError;
use shoal::flags::Flags;
use shoal::logger;
use shoal::shell::Shell;
use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shoal: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("shoal {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let level = if flags.is_set("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logger::init(level, flags.color_for(io::stderr().is_terminal()))?;

    let mut shell = Shell::new(&flags)?;
    shell.run()
}
