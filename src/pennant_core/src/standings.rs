#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use crate::team::Team;

/// Order two teams by win percentage, then wins minus losses, then run differential.
///
/// `Ordering::Greater` means `a` ranks above `b`.
pub fn compare(a: &Team, b: &Team) -> Ordering {
    a.win_pct()
        .total_cmp(&b.win_pct())
        .then_with(|| a.win_loss_margin().cmp(&b.win_loss_margin()))
        .then_with(|| a.run_differential().cmp(&b.run_differential()))
}

/// Rank teams best first. Teams level on every key keep their league order.
pub fn rank(teams: &[Team]) -> Vec<Team> {
    let mut table = teams.to_vec();
    table.sort_by(|a, b| compare(b, a));
    table
}

/// One line of the standings table.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StandingsRow {
    /// 1-based position
    pub rank: usize,

    pub team: Team,

    /// Leader's wins-minus-losses less this team's; `None` on the leader's row
    pub gap: Option<i64>,
}

/// Ranked standings with each team's gap to the leader.
pub fn table(teams: &[Team]) -> Vec<StandingsRow> {
    let ranked = rank(teams);
    let leader_margin = ranked.first().map(Team::win_loss_margin).unwrap_or(0);

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, team)| StandingsRow {
            rank: i + 1,
            gap: (i > 0).then(|| leader_margin - team.win_loss_margin()),
            team,
        })
        .collect()
}
