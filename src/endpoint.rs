// src/endpoint.rs
//! Every API path the crate calls, and how its response is shaped.
//!
//! Most endpoints answer a team- or game-scoped query with a list that
//! holds the one object we asked for; those get unwrapped to the first
//! element. The multi-result endpoints below answer with a list we need
//! in full (a calendar, a slate of games, lines from several books, the
//! talent table for every school), so they are passed through untouched.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    FbsTeams,
    Calendar,
    Games,
    Lines,
    PregameWinProbability,
    Weather,
    SeasonStats,
    SpRatings,
    FpiRatings,
    EloRatings,
    SrsRatings,
    PpaRatings,
    Records,
    Talent,
    ReturningProduction,
    Matchup,
    AdvancedBoxScore,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::FbsTeams              => "teams/fbs",
            Endpoint::Calendar              => "calendar",
            Endpoint::Games                 => "games",
            Endpoint::Lines                 => "lines",
            Endpoint::PregameWinProbability => "metrics/wp/pregame",
            Endpoint::Weather               => "games/weather",
            Endpoint::SeasonStats           => "stats/season/advanced",
            Endpoint::SpRatings             => "ratings/sp",
            Endpoint::FpiRatings            => "ratings/fpi",
            Endpoint::EloRatings            => "ratings/elo",
            Endpoint::SrsRatings            => "ratings/srs",
            Endpoint::PpaRatings            => "ppa/teams",
            Endpoint::Records               => "records",
            Endpoint::Talent                => "talent",
            Endpoint::ReturningProduction   => "player/returning",
            Endpoint::Matchup               => "teams/matchup",
            Endpoint::AdvancedBoxScore      => "game/box/advanced",
        }
    }

    /// Responses that must never be truncated to their first element.
    pub fn is_multi_result(self) -> bool {
        matches!(
            self,
            Endpoint::Calendar
                | Endpoint::Games
                | Endpoint::Lines
                | Endpoint::PregameWinProbability
                | Endpoint::Talent
                | Endpoint::Matchup
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_fixed() {
        let multi: Vec<&str> = [
            Endpoint::FbsTeams, Endpoint::Calendar, Endpoint::Games, Endpoint::Lines,
            Endpoint::PregameWinProbability, Endpoint::Weather, Endpoint::SeasonStats,
            Endpoint::SpRatings, Endpoint::FpiRatings, Endpoint::EloRatings,
            Endpoint::SrsRatings, Endpoint::PpaRatings, Endpoint::Records, Endpoint::Talent,
            Endpoint::ReturningProduction, Endpoint::Matchup, Endpoint::AdvancedBoxScore,
        ]
        .into_iter()
        .filter(|e| e.is_multi_result())
        .map(Endpoint::path)
        .collect();

        assert_eq!(
            multi,
            ["calendar", "games", "lines", "metrics/wp/pregame", "talent", "teams/matchup"]
        );
    }
}
