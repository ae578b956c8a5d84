use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the simulation core.
///
/// All of them are local precondition violations detected at construction
/// or query time. Bucket indexes never produce an error: they are clamped.
#[derive(Debug, Error)]
pub enum Error {
    /// Domain width or height is zero or above `MAX_DOMAIN_SIDE`.
    #[error("invalid domain: {width}x{height} (sides must be in 1..=65536)")]
    InvalidDomain { width: u32, height: u32 },

    /// A configuration value is non-finite or out of its accepted range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Step called with a negative or non-finite `dt`.
    #[error("invalid timestep: {0} (must be finite and >= 0)")]
    InvalidTimestep(f32),

    /// A density/gradient query was issued with unusable arguments.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Config JSON could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_domain_message_names_both_sides() {
        let e = Error::InvalidDomain { width: 0, height: 64 };
        let msg = e.to_string();
        assert!(msg.contains("0x64"));
    }

    #[test]
    fn parse_errors_convert() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("config parse error"));
    }
}
