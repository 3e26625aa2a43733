/// Log level for a run.
///
/// Verbose runs log everything down to trace level. Otherwise only warnings and
/// errors are shown; they go to stderr, so a document printed on stdout stays clean.
pub fn level_filter(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    }
}

/// Initializes the global logger.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new().filter_level(level_filter(verbose)).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(true), log::LevelFilter::Trace);
        assert_eq!(level_filter(false), log::LevelFilter::Warn);
        assert!(log::Level::Warn <= level_filter(false));
        assert!(log::Level::Info > level_filter(false));
    }
}
