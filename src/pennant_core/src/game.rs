#[cfg(feature = "python")]
use pyo3::prelude::*;
use rand::distributions::Distribution;
use rand::Rng;
use serde::Serialize;
use statrs::distribution::Normal;

use crate::constants::{
    BASE_RUNS, BATTING_FATIGUE_PENALTY, EXTRA_INNINGS_MAX_RUNS, HOME_FIELD_BONUS,
    MAX_EXPECTED_RUNS, MIN_EXPECTED_RUNS, PITCHING_FATIGUE_PENALTY, RUNS_PER_RATING_POINT,
};
use crate::team::Team;

/// Final score of one simulated game.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub home: String,
    pub away: String,
    pub home_runs: u32,
    pub away_runs: u32,
}

impl GameResult {
    /// Name of the side that scored more, `None` on a draw.
    pub fn winner(&self) -> Option<&str> {
        match self.home_runs.cmp(&self.away_runs) {
            std::cmp::Ordering::Greater => Some(self.home.as_str()),
            std::cmp::Ordering::Less => Some(self.away.as_str()),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.home_runs == self.away_runs
    }
}

/// Expected runs for `offense` batting against `defense`.
///
/// Fatigue wears down both the hitters and the opposing staff. The result is
/// clamped to [1.2, 8.5]; the home bonus is applied by the caller on top.
pub fn expected_runs(offense: &Team, defense: &Team) -> f64 {
    let attack = offense.batting as f64 - offense.fatigue as f64 * BATTING_FATIGUE_PENALTY;
    let block = defense.pitching as f64 - defense.fatigue as f64 * PITCHING_FATIGUE_PENALTY;
    let base = BASE_RUNS + (attack - block) * RUNS_PER_RATING_POINT;
    base.clamp(MIN_EXPECTED_RUNS, MAX_EXPECTED_RUNS)
}

/// Draw a run total around `expected`.
///
/// `noise` is a zero-mean normal carrying the scoring spread. Negative draws score
/// nothing; everything else rounds half away from zero.
pub fn sample_runs<R: Rng + ?Sized>(expected: f64, noise: &Normal, rng: &mut R) -> u32 {
    let value = expected + noise.sample(rng);
    if value < 0.0 {
        return 0;
    }
    value.round() as u32
}

/// Simulate a scoreline for `home` hosting `away`.
///
/// Draw order is fixed: home runs, away runs, then on a tie one extra-innings bonus
/// in [0, 2] for home and one for away. A tie that survives extra innings stands.
///
/// # Returns
/// (home_runs, away_runs)
pub fn simulate_score<R: Rng + ?Sized>(
    home: &Team,
    away: &Team,
    noise: &Normal,
    rng: &mut R,
) -> (u32, u32) {
    let home_expected = expected_runs(home, away) + HOME_FIELD_BONUS;
    let away_expected = expected_runs(away, home);

    let mut home_runs = sample_runs(home_expected, noise, rng);
    let mut away_runs = sample_runs(away_expected, noise, rng);

    if home_runs == away_runs {
        home_runs += rng.gen_range(0..=EXTRA_INNINGS_MAX_RUNS);
        away_runs += rng.gen_range(0..=EXTRA_INNINGS_MAX_RUNS);
    }

    (home_runs, away_runs)
}
