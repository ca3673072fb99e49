use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Usage = 1,
    Config = 2,
    PathShape = 3,
    FileAccess = 4,
}

impl ExitCode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            1 => Some(Self::Usage),
            2 => Some(Self::Config),
            3 => Some(Self::PathShape),
            4 => Some(Self::FileAccess),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Error)]
pub enum BookError {
    #[error("unable to read configuration '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("configuration is missing required key(s): {}", .keys.join(", "))]
    MissingKey { keys: Vec<&'static str> },

    #[error("chapter path '{path}' {reason}")]
    PathShape { path: String, reason: &'static str },

    #[error("unable to read '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BookError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigRead { .. } | Self::ConfigParse { .. } | Self::MissingKey { .. } => {
                ExitCode::Config
            }
            Self::PathShape { .. } => ExitCode::PathShape,
            Self::FileAccess { .. } => ExitCode::FileAccess,
        }
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type BookResult<T> = Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_round_trip_through_u8() {
        for code in [
            ExitCode::Success,
            ExitCode::Usage,
            ExitCode::Config,
            ExitCode::PathShape,
            ExitCode::FileAccess,
        ] {
            assert_eq!(ExitCode::from_u8(code as u8), Some(code));
        }
        assert_eq!(ExitCode::from_u8(9), None);
    }

    #[test]
    fn missing_key_lists_every_key() {
        let err = BookError::MissingKey {
            keys: vec!["toc.bib", "toc.extras"],
        };
        assert_eq!(
            err.to_string(),
            "configuration is missing required key(s): toc.bib, toc.extras"
        );
        assert_eq!(err.exit_code(), ExitCode::Config);
    }
}
