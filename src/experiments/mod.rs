//! Monte Carlo experiments comparing dice counts and strategies.
//!
//! Estimators here average repeated stochastic trials. Win-rate trials
//! are independent, so they fan out across worker threads; every trial
//! builds its own seeded dice state from the config seed and the trial
//! index, which keeps results reproducible regardless of scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{DiceRng, GameConfig, PlayerId, Result, GOAL_SCORE};
use crate::dice::{DiceSet, DiceSource, RandomDice};
use crate::game::play;
use crate::rules::{roll_dice, MAX_ROLLS};
use crate::strategy::{AlwaysRoll, BaconStrategy, FinalStrategy, PrimeStrategy, Strategy};

/// Default number of samples per Monte Carlo estimate.
pub const DEFAULT_NUM_SAMPLES: u32 = 1000;

/// Baseline roll count every strategy is measured against.
const BASELINE_ROLLS: u32 = 5;

/// Roll count for the plain fixed-count challenger.
const CHALLENGER_ROLLS: u32 = 8;

/// Multiplier spreading trial seeds across the seed space.
const SEED_STREAM_MUL: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for the experiment harness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Samples per Monte Carlo estimate.
    pub num_samples: u32,

    /// Base seed; per-trial seeds are derived from it.
    pub seed: u64,

    /// Goal score for simulated games.
    pub goal: u32,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_samples: DEFAULT_NUM_SAMPLES,
            seed: 0,
            goal: GOAL_SCORE,
        }
    }
}

impl ExperimentConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of samples per estimate.
    #[must_use]
    pub fn with_num_samples(mut self, num_samples: u32) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the goal score for simulated games.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }
}

/// Wrap a sampling function into one that returns the arithmetic mean
/// of `num_samples` invocations.
///
/// The wrapper never resets captured state between samples: cycling test
/// dice keep cycling and stochastic sources keep advancing. Callers that
/// need independent samples must capture a fresh source per sample.
/// `num_samples` must be positive for the mean to be defined.
pub fn make_averaged<F>(mut f: F, num_samples: u32) -> impl FnMut() -> Result<f64>
where
    F: FnMut() -> Result<f64>,
{
    move || {
        let mut total = 0.0;
        for _ in 0..num_samples {
            total += f()?;
        }
        Ok(total / f64::from(num_samples))
    }
}

/// Estimate the expected turn value of each candidate roll count from 1
/// to [`MAX_ROLLS`] and return the count with the highest estimate.
///
/// Ties favor the lowest count: the comparison is strict and the first
/// maximum wins. Every candidate draws from the same source.
pub fn max_scoring_num_rolls(dice: &mut dyn DiceSource, num_samples: u32) -> Result<u32> {
    let mut best_average = 0.0;
    let mut best_num_rolls = 1;

    for num_rolls in 1..=MAX_ROLLS {
        let mut averaged = make_averaged(|| roll_dice(num_rolls, dice).map(f64::from), num_samples);
        let estimate = averaged()?;
        if estimate > best_average {
            best_average = estimate;
            best_num_rolls = num_rolls;
        }
    }

    Ok(best_num_rolls)
}

/// Play one game and return the player with the higher final score.
///
/// Ties go to player 1, matching [`GameOutcome::winner`].
///
/// [`GameOutcome::winner`]: crate::game::GameOutcome::winner
pub fn winner(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut DiceSet,
    goal: u32,
) -> Result<PlayerId> {
    let config = GameConfig::new().with_goal(goal);
    let outcome = play(strategy0, strategy1, dice, &config)?;
    Ok(outcome.winner())
}

fn trial_seed(base: u64, stream: u64, trial: u32) -> u64 {
    let k = (stream << 32) | u64::from(trial);
    base.wrapping_add(k.wrapping_mul(SEED_STREAM_MUL))
}

/// Fraction of trials won by player 1, over independent seeded games.
fn player1_win_fraction(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    config: &ExperimentConfig,
    stream: u64,
) -> Result<f64> {
    let winners: Vec<PlayerId> = (0..config.num_samples)
        .into_par_iter()
        .map(|trial| {
            let mut dice = DiceSet::seeded(trial_seed(config.seed, stream, trial));
            winner(strategy0, strategy1, &mut dice, config.goal)
        })
        .collect::<Result<_>>()?;

    let player1_wins = winners.iter().filter(|who| **who == PlayerId::ONE).count();
    Ok(player1_wins as f64 / f64::from(config.num_samples))
}

/// Estimate a strategy's win probability against a baseline.
///
/// Averages the win rate over `num_samples` games going first and
/// `num_samples` games going second.
pub fn average_win_rate(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    config: &ExperimentConfig,
) -> Result<f64> {
    let rate_going_first = 1.0 - player1_win_fraction(strategy, baseline, config, 0)?;
    let rate_going_second = player1_win_fraction(baseline, strategy, config, 1)?;

    debug!(rate_going_first, rate_going_second, "win rates measured");
    Ok((rate_going_first + rate_going_second) / 2.0)
}

/// Results of the standard experiment suite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Best roll count for six-sided dice.
    pub six_sided_max: u32,

    /// Best roll count for four-sided dice.
    pub four_sided_max: u32,

    /// Win rates against the baseline, by strategy name.
    pub win_rates: Vec<(String, f64)>,
}

impl std::fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Max scoring num rolls for six-sided dice: {}",
            self.six_sided_max
        )?;
        writeln!(
            f,
            "Max scoring num rolls for four-sided dice: {}",
            self.four_sided_max
        )?;
        for (name, rate) in &self.win_rates {
            writeln!(f, "{name} win rate: {rate:.3}")?;
        }
        Ok(())
    }
}

/// Run the standard experiment suite.
///
/// Estimates the best roll count for each dice variant, then measures
/// the win rate of each heuristic strategy against an
/// [`AlwaysRoll`]`(5)` baseline.
pub fn run_experiments(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let mut rng = DiceRng::new(config.seed);

    info!(num_samples = config.num_samples, "estimating best roll counts");
    let mut six = RandomDice::six_sided(rng.fork());
    let six_sided_max = max_scoring_num_rolls(&mut six, config.num_samples)?;
    let mut four = RandomDice::four_sided(rng.fork());
    let four_sided_max = max_scoring_num_rolls(&mut four, config.num_samples)?;

    let baseline = AlwaysRoll::new(BASELINE_ROLLS);
    let challengers: Vec<(String, Box<dyn Strategy>)> = vec![
        (
            format!("always_roll({CHALLENGER_ROLLS})"),
            Box::new(AlwaysRoll::new(CHALLENGER_ROLLS)),
        ),
        ("bacon_strategy".to_string(), Box::new(BaconStrategy::new())),
        ("prime_strategy".to_string(), Box::new(PrimeStrategy::new())),
        ("final_strategy".to_string(), Box::new(FinalStrategy::new())),
    ];

    let mut win_rates = Vec::with_capacity(challengers.len());
    for (name, challenger) in &challengers {
        info!(strategy = name.as_str(), "measuring win rate");
        let rate = average_win_rate(challenger.as_ref(), &baseline, config)?;
        win_rates.push((name.clone(), rate));
    }

    Ok(ExperimentReport {
        six_sided_max,
        four_sided_max,
        win_rates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedDice;

    #[test]
    fn test_make_averaged_over_cycling_dice() {
        // A two-roll turn over cycling [3, 1, 5, 6] alternates between a
        // pig out worth 1 and a clean 11, averaging to 6 exactly.
        let mut dice = FixedDice::cycling(vec![3, 1, 5, 6]).unwrap();
        let mut averaged = make_averaged(|| roll_dice(2, &mut dice).map(f64::from), 1000);

        assert_eq!(averaged().unwrap(), 6.0);
    }

    #[test]
    fn test_make_averaged_of_raw_outcomes() {
        let mut dice = FixedDice::cycling(vec![3, 1, 5, 6]).unwrap();
        let mut averaged = make_averaged(|| dice.roll().map(f64::from), 1000);

        assert_eq!(averaged().unwrap(), 3.75);
    }

    #[test]
    fn test_make_averaged_propagates_errors() {
        let mut dice = FixedDice::strict(vec![3, 4]).unwrap();
        let mut averaged = make_averaged(|| dice.roll().map(f64::from), 1000);

        assert!(averaged().is_err());
    }

    #[test]
    fn test_max_scoring_prefers_ten_rolls_without_pig_out() {
        // Dice that always roll 3 make more rolls strictly better.
        let mut dice = FixedDice::cycling(vec![3]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 1000).unwrap(), 10);
    }

    #[test]
    fn test_max_scoring_tie_favors_lowest_count() {
        // Dice that always pig out score 1 for every count.
        let mut dice = FixedDice::cycling(vec![1]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 100).unwrap(), 1);
    }

    #[test]
    fn test_trial_seed_streams_do_not_collide() {
        let a = trial_seed(0, 0, 1);
        let b = trial_seed(0, 1, 1);
        assert_ne!(a, b);
    }
}
