//! XR session state
//!
//! Models the lifecycle of an immersive session as the platform reports it.
//! Actual session negotiation belongs to the platform runtime; this type only
//! tracks the state it would expose and enforces legal transitions.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArError, Result};
use crate::placement::traits::SessionState;

/// Kind of session requested from the XR runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionMode {
    ImmersiveAr,
    ImmersiveVr,
    Inline,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::ImmersiveAr => "immersive-ar",
            SessionMode::ImmersiveVr => "immersive-vr",
            SessionMode::Inline => "inline",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionMode {
    type Err = ArError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "immersive-ar" => Ok(SessionMode::ImmersiveAr),
            "immersive-vr" => Ok(SessionMode::ImmersiveVr),
            "inline" => Ok(SessionMode::Inline),
            other => Err(ArError::UnknownSessionMode(other.to_string())),
        }
    }
}

/// Lifecycle state of an XR session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XrState {
    NotInXr,
    EnteringXr,
    InXr,
    ExitingXr,
}

impl XrState {
    /// Whether moving from `self` to `next` is a legal step
    pub fn can_transition_to(self, next: XrState) -> bool {
        use XrState::*;
        matches!(
            (self, next),
            (NotInXr, EnteringXr)
                | (EnteringXr, InXr)
                | (EnteringXr, NotInXr)
                | (InXr, ExitingXr)
                | (ExitingXr, NotInXr)
        )
    }
}

impl fmt::Display for XrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            XrState::NotInXr => "NOT_IN_XR",
            XrState::EnteringXr => "ENTERING_XR",
            XrState::InXr => "IN_XR",
            XrState::ExitingXr => "EXITING_XR",
        };
        f.write_str(name)
    }
}

/// Session stand-in that tracks [`XrState`] without a platform runtime
#[derive(Debug, Clone)]
pub struct HeadlessSession {
    supported_modes: Vec<SessionMode>,
    mode: Option<SessionMode>,
    state: XrState,
}

impl Default for HeadlessSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSession {
    /// Session supporting `immersive-ar` and `inline`
    pub fn new() -> Self {
        Self::with_supported_modes(vec![SessionMode::ImmersiveAr, SessionMode::Inline])
    }

    pub fn with_supported_modes(supported_modes: Vec<SessionMode>) -> Self {
        Self {
            supported_modes,
            mode: None,
            state: XrState::NotInXr,
        }
    }

    pub fn is_supported(&self, mode: SessionMode) -> bool {
        self.supported_modes.contains(&mode)
    }

    /// Prepares the session for `mode`
    ///
    /// Resolves once the runtime has agreed to the mode. The session stays in
    /// [`XrState::NotInXr`] until [`HeadlessSession::enter`] is called.
    pub async fn create_experience(&mut self, mode: SessionMode) -> Result<()> {
        if !self.is_supported(mode) {
            return Err(ArError::UnsupportedSessionMode(mode));
        }
        log::info!("XR experience created for {}", mode);
        self.mode = Some(mode);
        Ok(())
    }

    /// Mode agreed by [`HeadlessSession::create_experience`], if any
    pub fn mode(&self) -> Option<SessionMode> {
        self.mode
    }

    pub fn state(&self) -> XrState {
        self.state
    }

    /// Moves to `next`, rejecting illegal transitions
    pub fn set_state(&mut self, next: XrState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(ArError::InvalidSessionTransition {
                from: self.state,
                to: next,
            });
        }
        log::debug!("XR state {} -> {}", self.state, next);
        self.state = next;
        Ok(())
    }

    /// Enters the immersive session, passing through `ENTERING_XR`
    pub fn enter(&mut self) -> Result<()> {
        let Some(mode) = self.mode else {
            return Err(ArError::InvalidConfig(
                "session entered before an experience was created".to_string(),
            ));
        };
        self.set_state(XrState::EnteringXr)?;
        self.set_state(XrState::InXr)?;
        log::info!("Entered {} session", mode);
        Ok(())
    }

    /// Leaves the immersive session, passing through `EXITING_XR`
    pub fn exit(&mut self) -> Result<()> {
        self.set_state(XrState::ExitingXr)?;
        self.set_state(XrState::NotInXr)?;
        log::info!("Exited XR session");
        Ok(())
    }
}

impl SessionState for HeadlessSession {
    fn xr_state(&self) -> XrState {
        self.state
    }
}
