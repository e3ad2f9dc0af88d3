use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use vpc_ip_map::config::{Config, LOG4RS_CONFIG_FILE};
use vpc_ip_map::process_stream;

/// Load log4rs.yml when present, otherwise log `info` and up to stderr.
/// stdout is reserved for the report.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG4RS_CONFIG_FILE).exists() {
        log4rs::init_file(LOG4RS_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG4RS_CONFIG_FILE}: {e}"))?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    log::info!("#Start main()");

    let config = Config::default();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match process_stream(stdin.lock(), &mut stdout.lock(), &config) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("{e}");
            Err(e.into())
        }
    }
}
