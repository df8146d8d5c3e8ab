use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::info;

use crate::config::SeasonConfig;
use crate::constants::LEAGUE_TEAMS;
use crate::error::{PennantError, Result};
use crate::season::Season;

/// Pennant share per team name, summing to 1.0.
pub type TitleOdds = HashMap<String, f64>;

/// Estimate each team's pennant odds by playing many full seasons.
///
/// Every simulated season gets its own seed drawn from a master generator seeded
/// with `seed`, so the result does not depend on how rayon schedules the work.
///
/// # Arguments
/// * `config` - Season settings; its seed is ignored in favour of the derived ones
/// * `n_simulations` - Number of seasons to play, at least 1
/// * `seed` - Master seed
///
/// # Returns
/// Map of every team to the fraction of seasons it finished first
pub fn project_titles(
    config: &SeasonConfig,
    n_simulations: usize,
    seed: u64,
) -> Result<TitleOdds> {
    if n_simulations == 0 {
        return Err(PennantError::InvalidConfiguration(
            "need at least one simulation".to_string(),
        ));
    }
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let seeds: Vec<u64> = (0..n_simulations).map(|_| rng.gen::<u64>()).collect();

    // Parallel computation over seasons
    let champions: Vec<Option<String>> = seeds
        .par_iter()
        .map(|&sim_seed| -> Result<Option<String>> {
            let mut season = Season::new(&config.user_team, config.rounds, sim_seed)?;
            season.simulate_to_end();
            Ok(season.champion().map(|team| team.name))
        })
        .collect::<Result<_>>()?;

    let mut odds: TitleOdds = LEAGUE_TEAMS
        .iter()
        .map(|(name, _, _)| (name.to_string(), 0.0))
        .collect();
    let share = 1.0 / n_simulations as f64;
    for name in champions.into_iter().flatten() {
        *odds.entry(name).or_insert(0.0) += share;
    }

    info!("Projected pennant odds over {n_simulations} seasons");
    Ok(odds)
}
