//! Round state types.

/// Round state.
///
/// `PlayerTurn → DealerTurn → Resolved`. A bust does not move the round on by
/// itself; the caller reads [`Hand::is_busted`](crate::Hand::is_busted) and
/// stands or resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Opening deal done, waiting for player actions.
    PlayerTurn,
    /// Player has stood, dealer draws.
    DealerTurn,
    /// Round has ended; only a reset is accepted.
    Resolved,
}
