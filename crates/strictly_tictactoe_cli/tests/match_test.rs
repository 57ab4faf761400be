//! Strategy matches.

use strictly_tictactoe::{GameStatus, Opponent, Strategy};
use strictly_tictactoe_cli::{MatchSettings, play_game, run_match};

#[test]
fn test_exhaustive_search_never_loses_to_random() {
    let settings = MatchSettings::new(Strategy::ExhaustiveSearch, Strategy::Random, 20, Some(1), true);
    let tally = run_match(&settings).unwrap();
    assert_eq!(*tally.second_wins(), 0);
    assert_eq!(tally.games(), 20);
}

#[test]
fn test_exhaustive_self_play_draws() {
    let settings = MatchSettings::new(
        Strategy::ExhaustiveSearch,
        Strategy::ExhaustiveSearch,
        2,
        Some(9),
        true,
    );
    let tally = run_match(&settings).unwrap();
    assert_eq!(*tally.draws(), 2);
}

#[test]
fn test_play_game_reaches_terminal_state() {
    let mut x = Opponent::with_seed(Strategy::Random, 4);
    let mut o = Opponent::with_seed(Strategy::Heuristic, 5);
    let status = play_game(&mut x, &mut o).unwrap();
    assert_ne!(status, GameStatus::InProgress);
}

#[test]
fn test_tally_serializes() {
    let settings = MatchSettings::new(Strategy::Heuristic, Strategy::Random, 4, Some(2), false);
    let tally = run_match(&settings).unwrap();
    let json = serde_json::to_value(tally).unwrap();
    assert_eq!(json["first"], "heuristic");
    let total = json["first_wins"].as_u64().unwrap()
        + json["second_wins"].as_u64().unwrap()
        + json["draws"].as_u64().unwrap();
    assert_eq!(total, 4);
}
