use thiserror::Error;

/// Error type that captures formatter misuse; formatting itself never fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("{format} cannot render {kind} values")]
    UnsupportedValue {
        format: &'static str,
        kind: &'static str,
    },
    #[error("unknown cell format `{0}`")]
    UnknownFormat(String),
}
