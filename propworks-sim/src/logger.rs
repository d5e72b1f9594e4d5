//! Host log backend

/// Environment variable holding the log filter (`warn`, `debug`, ...)
pub const LEVEL_VAR: &str = "PROPWORKS_LOG";

/// Filter used when [`LEVEL_VAR`] is unset
pub const DEFAULT_FILTER: &str = "info";

fn env() -> env_logger::Env<'static> {
    env_logger::Env::new().filter_or(LEVEL_VAR, DEFAULT_FILTER)
}

/// Install `env_logger` with the filter from [`LEVEL_VAR`]
///
/// Does nothing if a logger is already installed.
pub fn init() {
    let _ = env_logger::Builder::from_env(env()).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        std::env::remove_var(LEVEL_VAR);
        let logger = env_logger::Builder::from_env(env()).build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }
}
