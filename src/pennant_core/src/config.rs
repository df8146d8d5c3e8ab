// Season configuration, optionally loaded from a `[season]` TOML table.

use serde::Deserialize;

use crate::constants::{DEFAULT_ROUNDS, DEFAULT_SEED, DEFAULT_USER_TEAM, LEAGUE_TEAMS};
use crate::error::{PennantError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    /// Club the player manages; must be one of the league's teams.
    pub user_team: String,

    /// Double round-robin cycles to play.
    pub rounds: u32,

    pub seed: u64,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        SeasonConfig {
            user_team: DEFAULT_USER_TEAM.to_string(),
            rounds: DEFAULT_ROUNDS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Wrapper for the top-level `[season]` table.
#[derive(Debug, Default, Deserialize)]
struct SeasonFile {
    #[serde(default)]
    season: SeasonConfig,
}

impl SeasonConfig {
    pub fn new(user_team: impl Into<String>, rounds: u32, seed: u64) -> Self {
        SeasonConfig {
            user_team: user_team.into(),
            rounds,
            seed,
        }
    }

    /// Parse a config document. Missing keys fall back to the defaults.
    ///
    /// ```toml
    /// [season]
    /// user_team = "Osaka Titans"
    /// rounds = 2
    /// seed = 7
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: SeasonFile = toml::from_str(contents)?;
        file.season.validate()?;
        Ok(file.season)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(PennantError::InvalidConfiguration(
                "rounds must be at least 1".to_string(),
            ));
        }
        if !LEAGUE_TEAMS.iter().any(|(name, _, _)| *name == self.user_team) {
            return Err(PennantError::InvalidConfiguration(format!(
                "unknown user team: {}",
                self.user_team
            )));
        }
        Ok(())
    }
}
