use pyo3::prelude::*;

use crate::config::SeasonConfig;
use crate::constants::{DEFAULT_ROUNDS, DEFAULT_SEED, DEFAULT_USER_TEAM};
use crate::game::GameResult;
use crate::projection::{project_titles, TitleOdds};
use crate::schedule::build_schedule;
use crate::season::{RestReport, Season, TrainingReport};
use crate::standings::StandingsRow;
use crate::team::Team;

/// Python handle on a [`Season`].
#[pyclass(name = "Season")]
pub struct PySeason {
    inner: Season,
}

#[pymethods]
impl PySeason {
    #[new]
    #[pyo3(signature = (user_team = None, rounds = DEFAULT_ROUNDS, seed = DEFAULT_SEED))]
    fn new(user_team: Option<&str>, rounds: u32, seed: u64) -> PyResult<Self> {
        let inner = Season::new(user_team.unwrap_or(DEFAULT_USER_TEAM), rounds, seed)?;
        Ok(PySeason { inner })
    }

    /// Play the next match day. Empty once the season is over.
    fn advance_day(&mut self) -> Vec<GameResult> {
        self.inner.advance_day()
    }

    fn simulate_game(&mut self, home: &str, away: &str) -> PyResult<GameResult> {
        Ok(self.inner.simulate_game(home, away)?)
    }

    fn simulate_to_end(&mut self) -> usize {
        self.inner.simulate_to_end()
    }

    /// Train the user team's "batting" or "pitching". Raises ValueError otherwise.
    fn training(&mut self, focus: &str) -> PyResult<TrainingReport> {
        Ok(self.inner.training(focus)?)
    }

    fn rest(&mut self) -> RestReport {
        self.inner.rest()
    }

    fn standings(&self) -> Vec<Team> {
        self.inner.standings()
    }

    fn standings_table(&self) -> Vec<StandingsRow> {
        self.inner.standings_table()
    }

    #[pyo3(signature = (team = None))]
    fn roster(&self, team: Option<&str>) -> PyResult<Team> {
        Ok(self.inner.roster(team)?)
    }

    fn champion(&self) -> Option<Team> {
        self.inner.champion()
    }

    fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    #[getter]
    fn day(&self) -> usize {
        self.inner.day()
    }

    #[getter]
    fn rounds(&self) -> u32 {
        self.inner.rounds()
    }

    #[getter]
    fn user_team(&self) -> String {
        self.inner.user_team().to_string()
    }

    #[getter]
    fn schedule(&self) -> Vec<Vec<(String, String)>> {
        self.inner
            .schedule()
            .into_iter()
            .map(|day| {
                day.into_iter()
                    .map(|(home, away)| (home.to_string(), away.to_string()))
                    .collect()
            })
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.schedule_len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Season({:?}, day {}/{})",
            self.inner.user_team(),
            self.inner.day(),
            self.inner.schedule_len()
        )
    }
}

#[pymethods]
impl Team {
    #[getter]
    fn get_games(&self) -> u32 {
        self.games()
    }

    #[getter]
    fn get_win_pct(&self) -> f64 {
        self.win_pct()
    }

    fn __str__(&self) -> String {
        self.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Team({:?}, batting={}, pitching={}, fatigue={})",
            self.name, self.batting, self.pitching, self.fatigue
        )
    }
}

#[pymethods]
impl GameResult {
    #[getter]
    fn get_winner(&self) -> Option<String> {
        self.winner().map(str::to_string)
    }

    fn __repr__(&self) -> String {
        format!(
            "GameResult({} {} - {} {})",
            self.away, self.away_runs, self.home_runs, self.home
        )
    }
}

/// Build a double round-robin schedule for arbitrary team names.
#[pyfunction]
#[pyo3(name = "build_schedule")]
pub fn py_build_schedule(team_ids: Vec<String>, rounds: u32) -> PyResult<Vec<Vec<(String, String)>>> {
    Ok(build_schedule(&team_ids, rounds)?)
}

/// Pennant odds per team over `n_simulations` full seasons.
#[pyfunction]
#[pyo3(name = "project_titles", signature = (n_simulations, rounds = DEFAULT_ROUNDS, seed = DEFAULT_SEED))]
pub fn py_project_titles(n_simulations: usize, rounds: u32, seed: u64) -> PyResult<TitleOdds> {
    let config = SeasonConfig {
        rounds,
        ..SeasonConfig::default()
    };
    Ok(project_titles(&config, n_simulations, seed)?)
}
