//! Session port gating access to the board.

/// Reports whether a user is currently signed in.
///
/// Credential checks live outside the board; the board only asks.
pub trait SessionGate {
    /// Returns `true` when a user is authenticated.
    fn is_authenticated(&self) -> bool;
}
