use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Response has no propstat: {0}")]
    MissingPropstat(String),

    #[error(transparent)]
    RfcError(#[from] calprop_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] calprop_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
