//! Pennant Core - Baseball pennant race simulation.
//!
//! This library builds a double round-robin schedule for a six-team league, plays
//! it out with a fatigue-aware Gaussian run model, and ranks the standings.
//! Python bindings via PyO3 are available behind the `python` feature.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod projection;
pub mod schedule;
pub mod season;
pub mod standings;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use config::SeasonConfig;
pub use constants::{HOME_FIELD_BONUS, LEAGUE_TEAMS, RUNS_STDDEV};
pub use error::{PennantError, Result};
pub use game::{expected_runs, GameResult};
pub use projection::{project_titles, TitleOdds};
pub use schedule::{build_schedule, Fixture, MatchDay};
pub use season::{RestReport, Season, TrainingReport};
pub use standings::StandingsRow;
pub use team::{Focus, Team};

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn pennant_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<python::PySeason>()?;
    m.add_class::<Team>()?;
    m.add_class::<Focus>()?;
    m.add_class::<GameResult>()?;
    m.add_class::<TrainingReport>()?;
    m.add_class::<RestReport>()?;
    m.add_class::<StandingsRow>()?;

    // Functions
    m.add_function(wrap_pyfunction!(python::py_build_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_project_titles, m)?)?;

    // Constants
    m.add("HOME_FIELD_BONUS", HOME_FIELD_BONUS)?;
    m.add("RUNS_STDDEV", RUNS_STDDEV)?;
    m.add(
        "LEAGUE_TEAMS",
        LEAGUE_TEAMS.iter().map(|(name, _, _)| *name).collect::<Vec<_>>(),
    )?;

    Ok(())
}
