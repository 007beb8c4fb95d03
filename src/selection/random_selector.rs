//! Uniformly random move selector.
//!
//! Selects uniformly from the legal moves and is used both as a standalone
//! low-strength player and as the substitute whenever another selector
//! misbehaves.

use rand::prelude::IndexedRandom;

use crate::selection::selector_trait::MoveSelector;

pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn name(&self) -> &str {
        "uniform-random"
    }

    fn choose_move(
        &mut self,
        _fen: &str,
        legal_moves: &[String],
    ) -> Result<Option<String>, String> {
        if legal_moves.is_empty() {
            return Ok(None);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;
        Ok(Some(picked.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::RandomSelector;
    use crate::selection::selector_trait::MoveSelector;

    #[test]
    fn always_answers_with_a_member_of_the_list() {
        let legal: Vec<String> = ["e2e4", "d2d4", "g1f3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut selector = RandomSelector::new();

        for _ in 0..32 {
            let choice = selector
                .choose_move("fen-ignored", &legal)
                .expect("random selection should not fail")
                .expect("non-empty list should yield a move");
            assert!(legal.contains(&choice));
        }
    }

    #[test]
    fn declines_on_an_empty_list() {
        let mut selector = RandomSelector::new();
        let choice = selector
            .choose_move("fen-ignored", &[])
            .expect("empty selection should not fail");
        assert!(choice.is_none());
    }
}
