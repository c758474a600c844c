use serde::{Deserialize, Serialize};

/// How the root driver settles exactly equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Coin flip between the incumbent and the newcomer.
    #[default]
    Random,
    /// Keep the first move found; fully deterministic.
    FirstFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth handed to each root move's negamax; plies searched = depth + 1.
    pub depth: u32,
    pub tie_break: TieBreak,
    /// Seed for the tie-break generator. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            tie_break: TieBreak::Random,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Reproducible runs: first-found tie break, fixed seed.
    pub fn deterministic(depth: u32) -> Self {
        Self {
            depth,
            tie_break: TieBreak::FirstFound,
            seed: Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_search_three_plies_with_random_ties() {
        let c = SearchConfig::default();
        assert_eq!(c.depth, 2);
        assert_eq!(c.tie_break, TieBreak::Random);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn deterministic_preset_disables_coin_flip() {
        let c = SearchConfig::deterministic(1);
        assert_eq!(c.depth, 1);
        assert_eq!(c.tie_break, TieBreak::FirstFound);
    }
}
