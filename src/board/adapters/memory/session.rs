//! Fixed-answer session gate.

use crate::board::ports::SessionGate;

/// Session gate with a fixed authentication answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSession {
    authenticated: bool,
}

impl StaticSession {
    /// A session with a signed-in user.
    #[must_use]
    pub const fn signed_in() -> Self {
        Self {
            authenticated: true,
        }
    }

    /// A session without a signed-in user.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            authenticated: false,
        }
    }
}

impl SessionGate for StaticSession {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
