// src/games.rs
use serde::Deserialize;
use serde_json::Value;

/// One scheduled game, as the `games` endpoint returns it.
/// v1 answers in snake_case, v2 in camelCase; both are read.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Game {
    pub id: u64,
    pub season: i32,
    pub week: u32,
    #[serde(alias = "seasonType", default = "regular")]
    pub season_type: String,
    #[serde(alias = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(alias = "homeTeam")]
    pub home_team: String,
    #[serde(alias = "homeConference", default)]
    pub home_conference: Option<String>,
    #[serde(alias = "awayTeam")]
    pub away_team: String,
    #[serde(alias = "awayConference", default)]
    pub away_conference: Option<String>,
}

fn regular() -> String {
    s!("regular")
}

impl Game {
    /// "Away @ Home"
    pub fn matchup_label(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }
}

/// Decode a games response. Non-lists give nothing; entries that aren't games are skipped.
pub fn parse_games(body: &Value) -> Vec<Game> {
    let Some(list) = body.as_array() else {
        logw!("Games: response is not a list");
        return Vec::new();
    };

    list.iter()
        .filter_map(|v| match serde_json::from_value::<Game>(v.clone()) {
            Ok(g) => Some(g),
            Err(e) => {
                logd!("Games: skipping entry: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_v1_snake_case() {
        let body = json!([{
            "id": 401628374, "season": 2024, "week": 7, "season_type": "regular",
            "start_date": "2024-10-12T23:30:00.000Z", "venue": "Ohio Stadium",
            "home_team": "Ohio State", "home_conference": "Big Ten",
            "away_team": "Iowa", "away_conference": "Big Ten"
        }]);
        let games = parse_games(&body);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].home_team, "Ohio State");
        assert_eq!(games[0].venue.as_deref(), Some("Ohio Stadium"));
        assert_eq!(games[0].matchup_label(), "Iowa @ Ohio State");
    }

    #[test]
    fn reads_v2_camel_case() {
        let body = json!([{
            "id": 1, "season": 2025, "week": 1, "seasonType": "regular",
            "startDate": "2025-08-30T16:00:00.000Z", "venue": null,
            "homeTeam": "Texas", "homeConference": "SEC",
            "awayTeam": "Ohio State", "awayConference": "Big Ten"
        }]);
        let g = &parse_games(&body)[0];
        assert_eq!(g.away_team, "Ohio State");
        assert_eq!(g.start_date.as_deref(), Some("2025-08-30T16:00:00.000Z"));
        assert!(g.venue.is_none());
    }

    #[test]
    fn broken_entries_are_skipped() {
        let body = json!([
            { "id": "nope" },
            { "id": 2, "season": 2024, "week": 3, "home_team": "A", "away_team": "B" }
        ]);
        let games = parse_games(&body);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].season_type, "regular");
    }

    #[test]
    fn non_list_is_empty() {
        assert!(parse_games(&json!({"message": "Unauthorized"})).is_empty());
    }
}
