//! Move-selector abstraction at the collaborator boundary.
//!
//! A selector is handed the position as FEN plus the ordered legal moves in
//! UCI text and answers with one of those strings. Implementations may sit
//! on top of anything (a remote model, a search process, a fixed script);
//! the engine only ever consumes their output through the validated
//! selection wrapper, so a misbehaving selector cannot corrupt a game.

pub trait MoveSelector {
    /// Human-readable selector name, used in fallback log lines.
    fn name(&self) -> &str;

    /// Choose one move from `legal_moves` for the position in `fen`.
    ///
    /// `Ok(None)` means the selector declines to choose; an `Err` carries a
    /// selector-specific failure message. Both are treated the same way by
    /// the caller: a uniformly random legal move is substituted.
    fn choose_move(
        &mut self,
        fen: &str,
        legal_moves: &[String],
    ) -> Result<Option<String>, String>;
}
