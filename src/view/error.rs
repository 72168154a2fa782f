use thiserror::Error;

/// Failures while turning issues into table output.
#[derive(Error, Debug)]
pub enum ViewError {
    /// A timestamp did not match the Jira wire format.
    #[error("invalid {field} timestamp on {key}: '{value}'")]
    InvalidTimestamp {
        key: String,
        field: &'static str,
        value: String,
        #[source]
        source: crate::util::time::TimestampError,
    },

    /// The output sink rejected a write.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ViewError>;
