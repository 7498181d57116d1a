//! Game-loop integration tests using scripted and seeded dice.

use rust_hog::{play, AlwaysRoll, DiceSet, FixedDice, GameConfig, HogError, PlayerId};

fn scripted_dice(four: Vec<u32>, six: Vec<u32>) -> DiceSet {
    DiceSet::new(
        Box::new(FixedDice::cycling(four).unwrap()),
        Box::new(FixedDice::cycling(six).unwrap()),
    )
}

// =============================================================================
// Scripted Games
// =============================================================================

#[test]
fn test_game_follows_dice_selection() {
    // The four- and six-sided sources produce distinct constants, so the
    // final scores pin down exactly which variant each round used.
    let strategy = AlwaysRoll::new(1);
    let config = GameConfig::new().with_goal(10);
    let mut dice = scripted_dice(vec![2], vec![5]);

    let outcome = play(&strategy, &strategy, &mut dice, &config).unwrap();
    assert_eq!(outcome.scores(), (12, 9));
}

#[test]
fn test_game_ends_once_goal_reached() {
    // Player 0 starts one point short; the free-bacon turn scores 1,
    // making 100 with a combined score that is not prime, and the game
    // ends immediately.
    let strategy = AlwaysRoll::new(0);
    let config = GameConfig::new().with_starting_scores(99, 0);
    let mut dice = scripted_dice(vec![2], vec![5]);

    let outcome = play(&strategy, &strategy, &mut dice, &config).unwrap();
    assert_eq!(outcome.scores(), (100, 0));
    assert_eq!(outcome.winner(), PlayerId::ZERO);
}

#[test]
fn test_prime_bonus_can_push_past_goal() {
    // From (98, 96), player 0 rolls a six-sided 5 to reach 103. The new
    // combined score 199 is prime, so trailing player 1 gains 5 as well
    // and both players finish past the goal.
    let strategy = AlwaysRoll::new(1);
    let config = GameConfig::new().with_starting_scores(98, 96);
    let mut dice = scripted_dice(vec![2], vec![5]);

    let outcome = play(&strategy, &strategy, &mut dice, &config).unwrap();
    assert_eq!(outcome.scores(), (103, 101));
    assert_eq!(outcome.winner(), PlayerId::ZERO);
}

#[test]
fn test_trailing_player_gains_prime_bonus() {
    // Round 1: player 0 rolls a four-sided 2 (combined score 0 is a
    // multiple of 7). The new combined score 2 is prime and player 1
    // trails, so player 1 gains 2 as well.
    let strategy = AlwaysRoll::new(1);
    let config = GameConfig::new().with_goal(3);
    let mut dice = scripted_dice(vec![2], vec![5]);

    let outcome = play(&strategy, &strategy, &mut dice, &config).unwrap();
    // Round 2: scores (2, 2), sum 4, six-sided 5 -> (2, 7); 9 not prime.
    assert_eq!(outcome.scores(), (2, 7));
    assert_eq!(outcome.winner(), PlayerId::ONE);
}

// =============================================================================
// Strategy Contract
// =============================================================================

#[test]
fn test_out_of_range_strategy_fails_the_game() {
    let cheat = AlwaysRoll::new(11);
    let fair = AlwaysRoll::new(5);
    let config = GameConfig::default();
    let mut dice = DiceSet::seeded(1);

    let err = play(&cheat, &fair, &mut dice, &config).unwrap_err();
    assert_eq!(
        err,
        HogError::TooManyRolls {
            num_rolls: 11,
            max: 10
        }
    );
}

#[test]
fn test_strategies_see_their_own_score_first() {
    // A closure strategy that keys off its own score: it rolls zero only
    // when it holds exactly the starting score of player 1.
    let probe = |score: u32, _opponent: u32| if score == 30 { 0 } else { 3 };
    let other = AlwaysRoll::new(3);
    let config = GameConfig::new().with_starting_scores(0, 30).with_goal(31);
    let mut dice = scripted_dice(vec![2], vec![6]);

    // Player 1's first turn takes free bacon off player 0's score.
    let outcome = play(&other, &probe, &mut dice, &config).unwrap();
    assert!(outcome.score(PlayerId::ONE) > 30);
}

// =============================================================================
// Determinism and Termination
// =============================================================================

#[test]
fn test_same_seed_same_outcome() {
    let strategy = AlwaysRoll::new(6);
    let config = GameConfig::default();

    let outcome1 = play(
        &strategy,
        &strategy,
        &mut DiceSet::seeded(123),
        &config,
    )
    .unwrap();
    let outcome2 = play(
        &strategy,
        &strategy,
        &mut DiceSet::seeded(123),
        &config,
    )
    .unwrap();

    assert_eq!(outcome1, outcome2);
}

#[test]
fn test_different_seeds_usually_differ() {
    let strategy = AlwaysRoll::new(6);
    let config = GameConfig::default();

    let outcomes: Vec<_> = (0..20u64)
        .map(|seed| {
            play(&strategy, &strategy, &mut DiceSet::seeded(seed), &config)
                .unwrap()
                .scores()
        })
        .collect();

    let first = outcomes[0];
    assert!(outcomes.iter().any(|o| *o != first));
}

#[test]
fn test_all_constant_strategy_pairings_terminate() {
    let config = GameConfig::default();

    for rolls0 in 0..=10 {
        for rolls1 in 0..=10 {
            let s0 = AlwaysRoll::new(rolls0);
            let s1 = AlwaysRoll::new(rolls1);
            let mut dice = DiceSet::seeded(u64::from(rolls0 * 11 + rolls1));

            let outcome = play(&s0, &s1, &mut dice, &config).unwrap();
            let (score0, score1) = outcome.scores();
            assert!(
                score0 >= 100 || score1 >= 100,
                "game with ({rolls0}, {rolls1}) stopped early at {outcome}"
            );
        }
    }
}
