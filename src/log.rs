use ::log::LevelFilter;
use std::io::Write;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Installs a stderr logger showing messages of at least `level`. A `RUST_LOG` setting
/// in the environment overrides `level`. Repeated calls are no-ops.
pub fn build_logger_for_level(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{:>5}] {}", record.level(), record.args()))
        .parse_default_env();

    // another logger may already be installed (e.g. in tests)
    let _ = builder.try_init();
}

/// Like [`build_logger_for_level`] but raises `base` by one level per `verbosity`,
/// as in `-v`, `-vv`, ...
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(base, verbosity));
}

fn level_for_verbosity(base: LevelFilter, verbosity: usize) -> LevelFilter {
    let base = LEVELS.iter().position(|&l| l == base).unwrap_or(0);
    LEVELS[(base + verbosity).min(LEVELS.len() - 1)]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity() {
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 7), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(LevelFilter::Off, 1), LevelFilter::Error);
    }
}
