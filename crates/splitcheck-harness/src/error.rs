//! Harness error taxonomy.

use thiserror::Error;

/// Errors surfaced by the harness outside of case verdicts.
///
/// Numerical mismatches are not errors — they are verdicts, reported and
/// aggregated without stopping the run. Everything here is an environment
/// failure and aborts before or after the comparisons, never between them.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error("unknown backend '{0}', expected host|native")]
    UnknownBackend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_backend_names_the_input() {
        let err = HarnessError::UnknownBackend(String::from("libm"));
        assert_eq!(err.to_string(), "unknown backend 'libm', expected host|native");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::other("sink unavailable");
        let err = HarnessError::from(io);
        assert!(matches!(err, HarnessError::Io(_)));
    }
}
