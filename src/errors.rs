use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Represents all possible errors in the dirlist crate.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub enum Error {
    /// The directory does not exist or is not a directory, or the request
    /// url is blank or malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error indicating a failure to read metadata or enumerate a directory.
    #[error("Failed to read {what}: {how}")]
    FilesystemAccess {
        /// The item that failed to be read.
        what: String,
        /// The reason for the failure.
        how: String,
    },

    /// Error indicating a failure to encode a listing.
    #[error("Failed to serialize {what}: {how}")]
    Serialization {
        /// The item that failed to be serialized.
        what: String,
        /// The reason for the failure.
        how: String,
    },
}

impl Error {
    pub(crate) fn fs_access<W: ToString, H: ToString>(what: W, how: H) -> Self {
        Error::FilesystemAccess {
            what: what.to_string(),
            how: how.to_string(),
        }
    }

    /// Returns true when the caller supplied bad input.
    ///
    /// An HTTP layer maps these to a 4xx response and everything else to a
    /// 5xx response.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_input_is_client_error() {
        assert!(Error::InvalidInput("blank url".into()).is_client_error());
        assert!(!Error::fs_access("metadata", "denied").is_client_error());
        assert!(
            !Error::Serialization {
                what: "listing".into(),
                how: "oops".into()
            }
            .is_client_error()
        );
    }

    #[test]
    fn display_names_the_failing_item() {
        let err = Error::fs_access("/srv/logs", "permission denied");
        assert_eq!(err.to_string(), "Failed to read /srv/logs: permission denied");
    }
}
