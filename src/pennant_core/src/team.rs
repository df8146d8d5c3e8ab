#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_FATIGUE, MAX_RATING};
use crate::error::PennantError;

/// A club with batting/pitching ratings, a fatigue level and its season record.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,

    /// Offensive rating in [1, 99]
    pub batting: u32,

    /// Run prevention rating in [1, 99]
    pub pitching: u32,

    /// Accumulated fatigue in [0, 10]
    pub fatigue: u32,

    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
}

impl Team {
    /// Create a rested team with an empty record. Ratings are clamped to [1, 99].
    pub fn new(name: impl Into<String>, batting: u32, pitching: u32) -> Self {
        Team {
            name: name.into(),
            batting: batting.clamp(1, MAX_RATING),
            pitching: pitching.clamp(1, MAX_RATING),
            fatigue: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            runs_scored: 0,
            runs_allowed: 0,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Wins over decisions. Draws are not decisions; 0.0 before the first decision.
    pub fn win_pct(&self) -> f64 {
        let decisions = self.wins + self.losses;
        if decisions == 0 {
            return 0.0;
        }
        self.wins as f64 / decisions as f64
    }

    pub fn win_loss_margin(&self) -> i64 {
        self.wins as i64 - self.losses as i64
    }

    pub fn run_differential(&self) -> i64 {
        self.runs_scored as i64 - self.runs_allowed as i64
    }

    /// Raise a rating, capped at 99. Returns the new value.
    pub(crate) fn improve(&mut self, focus: Focus, gain: u32) -> u32 {
        let rating = match focus {
            Focus::Batting => &mut self.batting,
            Focus::Pitching => &mut self.pitching,
        };
        *rating = (*rating + gain).min(MAX_RATING);
        *rating
    }

    pub(crate) fn tire(&mut self, amount: u32) {
        self.fatigue = (self.fatigue + amount).min(MAX_FATIGUE);
    }

    pub(crate) fn recover(&mut self, amount: u32) {
        self.fatigue = self.fatigue.saturating_sub(amount);
    }

    /// Book one finished game from this team's point of view.
    pub(crate) fn record_game(&mut self, scored: u32, allowed: u32) {
        self.runs_scored += scored;
        self.runs_allowed += allowed;
        match scored.cmp(&allowed) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Less => self.losses += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}-{}-{} | bat {} | pit {} | fatigue {}",
            self.name, self.wins, self.losses, self.draws, self.batting, self.pitching, self.fatigue
        )
    }
}

/// Which rating a training session works on.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Batting,
    Pitching,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Batting => "batting",
            Focus::Pitching => "pitching",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Focus {
    type Err = PennantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "batting" => Ok(Focus::Batting),
            "pitching" => Ok(Focus::Pitching),
            _ => Err(PennantError::InvalidFocus(s.to_string())),
        }
    }
}
