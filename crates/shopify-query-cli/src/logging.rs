const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Pick the max log level. `--verbose` wins over `LOG_LEVEL`, which accepts
/// any `tracing` level name plus `verbose` as an alias for `debug`.
///
/// An unrecognized `LOG_LEVEL` is returned as a warning message so it can be
/// logged once the subscriber is installed.
pub(crate) fn resolve_level(
    verbose: bool,
    env_value: Option<&str>,
) -> Result<tracing::Level, String> {
    if verbose {
        return Ok(tracing::Level::DEBUG);
    }

    match env_value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) if value.eq_ignore_ascii_case("verbose") => Ok(tracing::Level::DEBUG),
        Some(value) => value.parse().map_err(|_| format!(
            "Invalid `{LOG_LEVEL_ENV_VAR}` environment variable value `{value}`, \
            using `{DEFAULT_LOG_LEVEL}`."
        )),
    }
}

pub(crate) fn init(verbose: bool) {
    let env_value = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let (level, warning) = match resolve_level(verbose, env_value.as_deref()) {
        Ok(level) => (level, None),
        Err(warning) => (DEFAULT_LOG_LEVEL, Some(warning)),
    };

    // Logs go to stderr so rendered documents on stdout stay pipeable.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
