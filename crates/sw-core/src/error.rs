//! Base error type.
//!
//! Each `sw-*` crate carries its own error enum tailored to its failure
//! modes; `CoreError` exists for the handful of cases that belong to no
//! particular subsystem.  A crate that needs to surface one of these can
//! wrap it in a variant or convert through `From` — whichever reads better
//! at the call sites.

use thiserror::Error;

use crate::HubId;

/// Failures not owned by any one subsystem.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("hub {0} not found")]
    HubNotFound(HubId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
