//! Simulation configuration.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, NetworkResult};

//-----------------------------------------------------------------------------
// Type Definitions
//-----------------------------------------------------------------------------

/// Configuration for a propagation simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Base probability that an eligible user likes (and shares) a post.
    /// Scaled per post by its clickbait factor.
    pub like_chance: f64,
    /// Probability that a user who liked a post follows its author.
    pub follow_chance: f64,
    /// Random seed for deterministic simulation. Drawn from entropy when
    /// absent.
    pub seed: Option<u64>,
    /// Cap on the number of timesteps a driver should run. Unbounded when
    /// absent; the natural termination predicate is all posts going stale.
    pub max_steps: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            like_chance: 0.5,
            follow_chance: 0.5,
            seed: None,
            max_steps: None,
        }
    }
}

impl SimulationConfig {
    /// Checks that both probabilities lie within [0, 1].
    pub fn validate(&self) -> NetworkResult<()> {
        for chance in [self.like_chance, self.follow_chance] {
            if !(0.0..=1.0).contains(&chance) || chance.is_nan() {
                return Err(NetworkError::InvalidProbability(chance));
            }
        }
        Ok(())
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        let config = SimulationConfig {
            like_chance: 1.01,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(NetworkError::InvalidProbability(1.01))
        );

        let config = SimulationConfig {
            follow_chance: -0.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(NetworkError::InvalidProbability(-0.5))
        );
    }
}
