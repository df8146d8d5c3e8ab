use crate::error::{PennantError, Result};

/// One game of a match day as (home, away).
pub type Fixture<T> = (T, T);

/// Every team's single game on one day of the season.
pub type MatchDay<T> = Vec<Fixture<T>>;

/// Build a season of `rounds` double round-robin cycles with the circle method.
///
/// The first team stays anchored while the rest rotate one seat per day. Pairs
/// alternate home/away by board position so the anchor does not always host. The
/// second leg replays the first with home and away swapped.
///
/// # Arguments
/// * `team_ids` - Distinct team identifiers; the count must be even
/// * `rounds` - Number of double cycles, at least 1
///
/// # Returns
/// `2 * (N - 1) * rounds` match days of `N / 2` fixtures each
pub fn build_schedule<T: Clone>(team_ids: &[T], rounds: u32) -> Result<Vec<MatchDay<T>>> {
    let n = team_ids.len();
    if n < 2 {
        return Err(PennantError::InvalidConfiguration(format!(
            "a league needs at least two teams, got {n}"
        )));
    }
    if n % 2 != 0 {
        return Err(PennantError::InvalidConfiguration(format!(
            "number of teams must be even, got {n}"
        )));
    }
    if rounds == 0 {
        return Err(PennantError::InvalidConfiguration(
            "rounds must be at least 1".to_string(),
        ));
    }

    let mut rotation = team_ids.to_vec();
    let mut first_leg: Vec<MatchDay<T>> = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        let day = (0..n / 2)
            .map(|i| {
                let a = rotation[i].clone();
                let b = rotation[n - 1 - i].clone();
                if i % 2 == 0 {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect();
        first_leg.push(day);
        rotation[1..].rotate_right(1);
    }

    let second_leg: Vec<MatchDay<T>> = first_leg
        .iter()
        .map(|day| day.iter().map(|(h, a)| (a.clone(), h.clone())).collect())
        .collect();

    let cycle_len = first_leg.len() + second_leg.len();
    let mut schedule = Vec::with_capacity(cycle_len * rounds as usize);
    for _ in 0..rounds {
        schedule.extend(first_leg.iter().cloned());
        schedule.extend(second_leg.iter().cloned());
    }

    Ok(schedule)
}

/// Number of match days `build_schedule` produces for `n_teams` and `rounds`.
pub fn schedule_len(n_teams: usize, rounds: u32) -> usize {
    2 * n_teams.saturating_sub(1) * rounds as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    fn ids(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    fn meetings(schedule: &[MatchDay<usize>]) -> HashMap<(usize, usize), u32> {
        let mut counts = HashMap::new();
        for day in schedule {
            for &(home, away) in day {
                *counts.entry((home, away)).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn test_six_teams_one_round() {
        let schedule = build_schedule(&ids(6), 1).unwrap();
        assert_eq!(schedule.len(), 10);
        assert!(schedule.iter().all(|day| day.len() == 3));
        assert_eq!(schedule.len(), schedule_len(6, 1));
    }

    #[test]
    fn test_first_day_matches_circle_layout() {
        let names = ["A", "B", "C", "D", "E", "F"];
        let schedule = build_schedule(&names, 1).unwrap();

        // Seats 0-5, 1-4 (reversed on odd seat), 2-3
        assert_eq!(schedule[0], vec![("A", "F"), ("E", "B"), ("C", "D")]);
        // F moves next to the anchor
        assert_eq!(schedule[1], vec![("A", "E"), ("D", "F"), ("B", "C")]);
        // Second leg mirrors the first
        assert_eq!(schedule[5], vec![("F", "A"), ("B", "E"), ("D", "C")]);
    }

    #[test]
    fn test_odd_team_count_rejected() {
        let result = build_schedule(&ids(5), 1);
        assert!(matches!(result, Err(PennantError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(build_schedule(&ids(0), 1).is_err());
        assert!(build_schedule(&ids(4), 0).is_err());
    }

    #[test]
    fn test_two_teams() {
        let schedule = build_schedule(&["A", "B"], 2).unwrap();
        assert_eq!(
            schedule,
            vec![vec![("A", "B")], vec![("B", "A")], vec![("A", "B")], vec![("B", "A")]]
        );
    }

    proptest! {
        #[test]
        fn prop_every_team_once_per_day(half in 1usize..8, rounds in 1u32..4) {
            let n = half * 2;
            let schedule = build_schedule(&ids(n), rounds).unwrap();
            prop_assert_eq!(schedule.len(), schedule_len(n, rounds));
            for day in &schedule {
                prop_assert_eq!(day.len(), n / 2);
                let seen: HashSet<usize> = day.iter().flat_map(|&(h, a)| [h, a]).collect();
                prop_assert_eq!(seen.len(), n);
            }
        }

        #[test]
        fn prop_balanced_home_and_away(half in 1usize..8, rounds in 1u32..4) {
            let n = half * 2;
            let counts = meetings(&build_schedule(&ids(n), rounds).unwrap());
            for a in 0..n {
                for b in 0..n {
                    let hosted = counts.get(&(a, b)).copied().unwrap_or(0);
                    if a == b {
                        prop_assert_eq!(hosted, 0);
                    } else {
                        prop_assert_eq!(hosted, rounds);
                    }
                }
            }
        }

        #[test]
        fn prop_each_cycle_is_identical(half in 1usize..6) {
            let n = half * 2;
            let schedule = build_schedule(&ids(n), 3).unwrap();
            let cycle = 2 * (n - 1);
            prop_assert_eq!(&schedule[..cycle], &schedule[cycle..2 * cycle]);
            prop_assert_eq!(&schedule[..cycle], &schedule[2 * cycle..]);
        }
    }
}
