/// League-average expected runs for two evenly matched, rested teams
pub const BASE_RUNS: f64 = 3.4;

/// Expected runs gained per point of batting-over-pitching edge
pub const RUNS_PER_RATING_POINT: f64 = 0.06;

/// Batting points lost per point of the offense's fatigue
pub const BATTING_FATIGUE_PENALTY: f64 = 0.8;

/// Pitching points lost per point of the defense's fatigue
pub const PITCHING_FATIGUE_PENALTY: f64 = 0.6;

/// Lower bound on expected runs before the home bonus
pub const MIN_EXPECTED_RUNS: f64 = 1.2;

/// Upper bound on expected runs before the home bonus
pub const MAX_EXPECTED_RUNS: f64 = 8.5;

/// Expected runs added for the home side
pub const HOME_FIELD_BONUS: f64 = 0.35;

/// Standard deviation of a side's sampled runs
pub const RUNS_STDDEV: f64 = 1.6;

/// Largest extra-innings bonus added to each side of a tied game
pub const EXTRA_INNINGS_MAX_RUNS: u32 = 2;

/// Ratings are capped here
pub const MAX_RATING: u32 = 99;

/// Fatigue is capped here
pub const MAX_FATIGUE: u32 = 10;

/// Fatigue each side picks up from playing a game
pub const GAME_FATIGUE: u32 = 1;

/// Fatigue picked up from a training session
pub const TRAINING_FATIGUE: u32 = 2;

/// Inclusive range of rating points gained from one training session
pub const TRAINING_GAIN: (u32, u32) = (1, 3);

/// Inclusive range of fatigue recovered from one rest day
pub const REST_RECOVERY: (u32, u32) = (2, 4);

/// Fixed league roster as (name, batting, pitching), in league order
pub const LEAGUE_TEAMS: [(&str, u32, u32); 6] = [
    ("Tokyo Stars", 72, 68),
    ("Osaka Titans", 69, 71),
    ("Nagoya Dragons", 66, 74),
    ("Yokohama Mariners", 75, 63),
    ("Fukuoka Hawks", 70, 70),
    ("Sapporo Bears", 64, 76),
];

/// User team when none is configured
pub const DEFAULT_USER_TEAM: &str = "Tokyo Stars";

/// Double round-robin cycles in a default season
pub const DEFAULT_ROUNDS: u32 = 10;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;
