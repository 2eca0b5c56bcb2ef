//! Error types shared across the crate
//!
//! The placement controller itself has no failure modes of its own; errors only
//! originate from the scene/session collaborators and from configuration.

use thiserror::Error;

use crate::gfx::scene::ObjectHandle;
use crate::xr::{SessionMode, XrState};

/// Errors raised by the scene, session and application shell
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArError {
    #[error("unknown object handle {0:?}")]
    UnknownObject(ObjectHandle),

    #[error("unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("unknown session mode '{0}'")]
    UnknownSessionMode(String),

    #[error("session mode '{0}' is not supported by this session")]
    UnsupportedSessionMode(SessionMode),

    #[error("invalid session transition from {from} to {to}")]
    InvalidSessionTransition { from: XrState, to: XrState },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ArError>;
