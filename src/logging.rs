use log::LevelFilter;

/// Initialise `env_logger`. `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
