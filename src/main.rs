// std imports
use std::{
    io::{stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use fuzzmatch::{
    app::{App, Input, Options},
    cli, config,
    error::*,
};

const FUZZMATCH_DEBUG_LOG: &str = "FUZZMATCH_DEBUG_LOG";
const FUZZMATCH_DEBUG_LOG_STYLE: &str = "FUZZMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<()> {
    if std::env::var(FUZZMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(FUZZMATCH_DEBUG_LOG)
                .write_style(FUZZMATCH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let opt = cli::BootstrapOpt::parse().args;
    let settings = config::load(&opt.config)?;
    config::initialize(settings);

    Ok(())
}

fn run() -> Result<()> {
    bootstrap()?;

    let settings = config::get();
    let opt = cli::Opt::parse();
    let precompute = opt.resolve_precompute(settings.automaton.precompute);

    let input = match (opt.pattern, opt.text) {
        (Some(pattern), Some(text)) => Input { pattern, text },
        _ => {
            log::debug!("reading pattern and text from stdin");
            Input::read(stdin().lock())?
        }
    };

    let app = App::new(Options {
        wildcard: opt.wildcard,
        separator: opt.separator,
        show_count: settings.output.show_count && !opt.no_count,
        count_only: opt.count_only,
        precompute,
    });

    app.run(&input, &mut stdout().lock())
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
