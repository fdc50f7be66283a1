//! Errors of the build-script facing configuration layer.

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown toolchain `{0}`; expected one of gcc, clang, msvc, icc, nvhpc, nvrtc, unknown")]
    UnknownToolchain(String),

    #[error("unknown domain `{0}`; expected `host` or `device`")]
    UnknownDomain(String),

    #[error("unknown override `{0}`")]
    UnknownOverride(String),

    #[error("environment variable {key} is not valid unicode")]
    NotUnicode { key: &'static str },
}
