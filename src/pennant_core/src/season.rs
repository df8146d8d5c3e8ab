#[cfg(feature = "python")]
use pyo3::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use statrs::distribution::Normal;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::config::SeasonConfig;
use crate::constants::{
    GAME_FATIGUE, LEAGUE_TEAMS, REST_RECOVERY, RUNS_STDDEV, TRAINING_FATIGUE, TRAINING_GAIN,
};
use crate::error::{PennantError, Result};
use crate::game::{simulate_score, GameResult};
use crate::schedule::{build_schedule, MatchDay};
use crate::standings::{self, StandingsRow};
use crate::team::{Focus, Team};

/// Outcome of a training session.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrainingReport {
    pub attribute: Focus,

    /// Points drawn for the session, before the 99 cap
    pub gain: u32,

    /// Rating after the session
    pub value: u32,
}

/// Fatigue before and after a rest day.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestReport {
    pub before_fatigue: u32,
    pub after_fatigue: u32,
}

/// A pennant race: the league's teams, their schedule and the day cursor.
///
/// All randomness comes from one ChaCha8 stream seeded at construction, so two
/// seasons built with the same seed and driven through the same calls produce
/// identical results.
#[derive(Clone, Debug)]
pub struct Season {
    /// Teams in league order; standings ties fall back to this order
    teams: Vec<Team>,

    /// Index of the player's club in `teams`
    user: usize,

    rounds: u32,

    /// Next match day to play (0-based)
    day: usize,

    /// Fixtures as indices into `teams`
    schedule: Vec<MatchDay<usize>>,

    rng: ChaCha8Rng,

    /// Zero-mean spread applied to every sampled run total
    noise: Normal,
}

impl Season {
    /// Set up a season for the fixed six-team league.
    ///
    /// # Arguments
    /// * `user_team` - Club managed by the player
    /// * `rounds` - Double round-robin cycles to play
    /// * `seed` - Seed for every random draw of the season
    pub fn new(user_team: &str, rounds: u32, seed: u64) -> Result<Self> {
        let teams = LEAGUE_TEAMS
            .iter()
            .map(|&(name, batting, pitching)| Team::new(name, batting, pitching))
            .collect();
        Self::from_teams(teams, user_team, rounds, seed)
    }

    pub fn from_config(config: &SeasonConfig) -> Result<Self> {
        Self::new(&config.user_team, config.rounds, config.seed)
    }

    pub(crate) fn from_teams(
        teams: Vec<Team>,
        user_team: &str,
        rounds: u32,
        seed: u64,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = teams.iter().find(|t| !seen.insert(t.name.as_str())) {
            return Err(PennantError::InvalidConfiguration(format!(
                "duplicate team: {}",
                dup.name
            )));
        }

        let user = teams
            .iter()
            .position(|t| t.name == user_team)
            .ok_or_else(|| {
                PennantError::InvalidConfiguration(format!("unknown user team: {user_team}"))
            })?;

        let indices: Vec<usize> = (0..teams.len()).collect();
        let schedule = build_schedule(&indices, rounds)?;

        let noise = Normal::new(0.0, RUNS_STDDEV)
            .map_err(|e| PennantError::InvalidConfiguration(format!("scoring noise: {e}")))?;

        info!(
            "New season: {} teams, {} rounds, {} match days, managing {}",
            teams.len(),
            rounds,
            schedule.len(),
            user_team
        );

        Ok(Season {
            teams,
            user,
            rounds,
            day: 0,
            schedule,
            rng: ChaCha8Rng::seed_from_u64(seed),
            noise,
        })
    }

    /// Play every fixture of the current match day in listed order.
    ///
    /// Returns one result per fixture. On a finished season this returns an empty
    /// list and leaves the cursor alone.
    pub fn advance_day(&mut self) -> Vec<GameResult> {
        let Some(fixtures) = self.schedule.get(self.day).cloned() else {
            return Vec::new();
        };

        debug!("Match day {}/{}", self.day + 1, self.schedule.len());
        let results: Vec<GameResult> = fixtures
            .into_iter()
            .map(|(home, away)| self.play(home, away))
            .collect();
        self.day += 1;

        if self.is_finished() {
            if let Some(champion) = self.champion() {
                info!(
                    "Season finished, {} win the pennant ({}-{}-{})",
                    champion.name, champion.wins, champion.losses, champion.draws
                );
            }
        }

        results
    }

    /// Play out every remaining match day. Returns how many days were played.
    pub fn simulate_to_end(&mut self) -> usize {
        let remaining = self.schedule.len().saturating_sub(self.day);
        while !self.is_finished() {
            self.advance_day();
        }
        remaining
    }

    /// Play one game between two named teams and book it into both records.
    ///
    /// Fails with `UnknownTeam` before any draw or mutation when either name is not
    /// in the league. The day cursor does not move.
    pub fn simulate_game(&mut self, home: &str, away: &str) -> Result<GameResult> {
        let home = self.position(home)?;
        let away = self.position(away)?;
        if home == away {
            return Err(PennantError::InvalidConfiguration(format!(
                "{} cannot play itself",
                self.teams[home].name
            )));
        }
        Ok(self.play(home, away))
    }

    fn play(&mut self, home: usize, away: usize) -> GameResult {
        let (home_runs, away_runs) =
            simulate_score(&self.teams[home], &self.teams[away], &self.noise, &mut self.rng);

        for (idx, scored, allowed) in [(home, home_runs, away_runs), (away, away_runs, home_runs)] {
            let team = &mut self.teams[idx];
            team.record_game(scored, allowed);
            team.tire(GAME_FATIGUE);
        }

        let result = GameResult {
            home: self.teams[home].name.clone(),
            away: self.teams[away].name.clone(),
            home_runs,
            away_runs,
        };
        debug!(
            "{} {} - {} {}",
            result.away, result.away_runs, result.home_runs, result.home
        );
        result
    }

    /// Train the user team. Fails with `InvalidFocus` unless `focus` names
    /// batting or pitching; nothing is drawn or changed in that case.
    pub fn training(&mut self, focus: &str) -> Result<TrainingReport> {
        let focus: Focus = focus.parse()?;
        Ok(self.train(focus))
    }

    /// Train the user team: +1..=3 on the chosen rating (capped at 99) and +2 fatigue.
    pub fn train(&mut self, focus: Focus) -> TrainingReport {
        let gain = self.rng.gen_range(TRAINING_GAIN.0..=TRAINING_GAIN.1);
        let team = &mut self.teams[self.user];
        let value = team.improve(focus, gain);
        team.tire(TRAINING_FATIGUE);

        debug!("{} trained {focus}: +{gain} -> {value}", team.name);
        TrainingReport {
            attribute: focus,
            gain,
            value,
        }
    }

    /// Rest the user team, recovering 2..=4 fatigue.
    pub fn rest(&mut self) -> RestReport {
        let recovery = self.rng.gen_range(REST_RECOVERY.0..=REST_RECOVERY.1);
        let team = &mut self.teams[self.user];
        let before_fatigue = team.fatigue;
        team.recover(recovery);

        debug!("{} rested: fatigue {before_fatigue} -> {}", team.name, team.fatigue);
        RestReport {
            before_fatigue,
            after_fatigue: team.fatigue,
        }
    }

    /// Teams ranked best first. See [`standings::compare`] for the tie-break chain.
    pub fn standings(&self) -> Vec<Team> {
        standings::rank(&self.teams)
    }

    pub fn standings_table(&self) -> Vec<StandingsRow> {
        standings::table(&self.teams)
    }

    /// Snapshot of a team, the user team when `team` is `None`.
    pub fn roster(&self, team: Option<&str>) -> Result<Team> {
        let idx = match team {
            Some(name) => self.position(name)?,
            None => self.user,
        };
        Ok(self.teams[idx].clone())
    }

    /// Standings leader once the last match day has been played.
    pub fn champion(&self) -> Option<Team> {
        if !self.is_finished() {
            return None;
        }
        self.standings().into_iter().next()
    }

    pub fn is_finished(&self) -> bool {
        self.day >= self.schedule.len()
    }

    pub fn day(&self) -> usize {
        self.day
    }

    pub fn schedule_len(&self) -> usize {
        self.schedule.len()
    }

    /// The full schedule as (home, away) team names.
    pub fn schedule(&self) -> Vec<MatchDay<&str>> {
        self.schedule
            .iter()
            .map(|day| {
                day.iter()
                    .map(|&(home, away)| {
                        (self.teams[home].name.as_str(), self.teams[away].name.as_str())
                    })
                    .collect()
            })
            .collect()
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn user_team(&self) -> &str {
        &self.teams[self.user].name
    }

    /// Teams in league order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.teams
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| PennantError::UnknownTeam(name.to_string()))
    }
}
