use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidHexColor { .. } => "InvalidHexColor",
            ErrorImpl::MissingArgument { .. } => "MissingArgument",
            ErrorImpl::UnknownFlag { .. } => "UnknownFlag",
            ErrorImpl::FileRead { .. } => "FileRead",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidHexColor { value } => ErrorTip::Suggestion(format!(
                "Invalid color `{}`, expected `#RRGGBB`",
                value
            )),
            ErrorImpl::MissingArgument { name } => {
                ErrorTip::Suggestion(format!("Missing value for `{}`", name))
            }
            ErrorImpl::UnknownFlag { flag } => ErrorTip::Suggestion(format!(
                "Unknown flag `{}`, see the usage line below",
                flag
            )),
            ErrorImpl::FileRead { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid hex color: {value:?}")]
    InvalidHexColor { value: String },
    #[error("missing value for argument {name:?}")]
    MissingArgument { name: String },
    #[error("unknown flag {flag:?}")]
    UnknownFlag { flag: String },
    #[error("could not read {path:?}: {message}")]
    FileRead { path: String, message: String },
}
