use thiserror::Error;

use crate::rfc::dav::parse::ParseError;

/// RFC parsing errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
