use log::LevelFilter;

/// Sets up `env_logger` on stderr. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok(); // already initialised
}
