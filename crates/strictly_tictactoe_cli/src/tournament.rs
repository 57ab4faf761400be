//! Strategy matches: many games between two computer opponents.

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use strictly_tictactoe::{GameStatus, Opponent, Player, Session, Strategy};
use tracing::{debug, info, instrument};

/// Settings for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Getters)]
pub struct MatchSettings {
    /// Strategy listed first.
    first: Strategy,
    /// Strategy listed second.
    second: Strategy,
    /// Games to play.
    games: u32,
    /// Base seed for reproducible matches.
    seed: Option<u64>,
    /// Alternate which strategy plays X.
    swap: bool,
}

/// Results of a match, from the first strategy's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct MatchTally {
    /// Strategy listed first.
    first: Option<Strategy>,
    /// Strategy listed second.
    second: Option<Strategy>,
    /// Games the first strategy won.
    first_wins: u32,
    /// Games the second strategy won.
    second_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl MatchTally {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

impl std::fmt::Display for MatchTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = |s: Option<Strategy>| s.map(|s| s.to_string()).unwrap_or_default();
        write!(
            f,
            "{} vs {} over {} games: {} wins, {} losses, {} draws",
            name(self.first),
            name(self.second),
            self.games(),
            self.first_wins,
            self.second_wins,
            self.draws
        )
    }
}

fn opponent(strategy: Strategy, seed: Option<u64>) -> Opponent {
    match seed {
        Some(seed) => Opponent::with_seed(strategy, seed),
        None => Opponent::new(strategy),
    }
}

/// Plays one game to completion; returns the final status.
pub fn play_game(x: &mut Opponent, o: &mut Opponent) -> anyhow::Result<GameStatus> {
    let mut session = Session::new();
    while !session.is_over() {
        let player = session.current_player();
        let mover = match player {
            Player::First => &mut *x,
            Player::Second => &mut *o,
        };
        let Some(index) = mover.choose(session.board(), player) else {
            anyhow::bail!("{} found no move on a live board", mover.strategy());
        };
        session.submit_move(index)?;
    }
    Ok(session.status())
}

/// Runs a match and tallies the results.
#[instrument(skip(settings), fields(first = %settings.first, second = %settings.second, games = settings.games))]
pub fn run_match(settings: &MatchSettings) -> anyhow::Result<MatchTally> {
    let mut tally = MatchTally {
        first: Some(settings.first),
        second: Some(settings.second),
        ..MatchTally::default()
    };

    for game in 0..settings.games {
        let seed = settings
            .seed
            .map(|s| s.wrapping_add(u64::from(game).wrapping_mul(2)));
        let mut first = opponent(settings.first, seed);
        let mut second = opponent(settings.second, seed.map(|s| s.wrapping_add(1)));

        let first_is_x = !settings.swap || game % 2 == 0;
        let first_mark = if first_is_x { Player::First } else { Player::Second };
        let status = if first_is_x {
            play_game(&mut first, &mut second)?
        } else {
            play_game(&mut second, &mut first)?
        };

        match status.winner() {
            Some(winner) if winner == first_mark => tally.first_wins += 1,
            Some(_) => tally.second_wins += 1,
            None => tally.draws += 1,
        }
        debug!(game, ?status, "Game finished");
    }

    info!(
        first_wins = tally.first_wins,
        second_wins = tally.second_wins,
        draws = tally.draws,
        "Match complete"
    );
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_every_game() {
        let settings = MatchSettings::new(Strategy::Random, Strategy::Heuristic, 20, Some(5), true);
        let tally = run_match(&settings).unwrap();
        assert_eq!(tally.games(), 20);
    }

    #[test]
    fn test_seeded_match_is_reproducible() {
        let settings = MatchSettings::new(Strategy::Random, Strategy::Random, 30, Some(11), true);
        assert_eq!(run_match(&settings).unwrap(), run_match(&settings).unwrap());
    }

    #[test]
    fn test_display() {
        let tally = MatchTally {
            first: Some(Strategy::Heuristic),
            second: Some(Strategy::Random),
            first_wins: 3,
            second_wins: 1,
            draws: 2,
        };
        assert_eq!(
            tally.to_string(),
            "heuristic vs random over 6 games: 3 wins, 1 losses, 2 draws"
        );
    }
}
