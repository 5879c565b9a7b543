// src/matchup.rs
//! One game in, one nested record out.
//!
//! Every field below is filled by its own sub-fetch. A sub-fetch that fails
//! leaves `null` in its slot and the rest carry on, so the record always has
//! the same shape regardless of how much the API gave us.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    client::ApiClient,
    endpoint::Endpoint,
    error::{Fetch, FetchError},
    games::Game,
    progress::Progress,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchupRecord {
    pub game_info: GameInfo,
    pub betting: Betting,
    pub matchup_history: Option<Value>,
    pub advanced_box_score: Option<Value>,
    pub home_team_data: TeamProfile,
    pub away_team_data: TeamProfile,
    pub retrieved_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameInfo {
    pub id: u64,
    pub start_date: Option<String>,
    pub venue: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub home_conference: Option<String>,
    pub away_conference: Option<String>,
    pub season_type: String,
    pub weather: Option<Value>,
    pub pregame_win_probability: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Betting {
    pub current_lines: Option<Value>,
    pub home_team_betting_history: Option<Value>,
    pub away_team_betting_history: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TeamProfile {
    pub season_stats: Option<Value>,
    pub sp_ratings: Option<Value>,
    pub fpi_ratings: Option<Value>,
    pub elo_ratings: Option<Value>,
    pub srs_ratings: Option<Value>,
    pub ppa_ratings: Option<Value>,
    pub record: Option<Value>,
    pub returning_production: Option<Value>,
    pub talent_ranking: Option<Value>,
}

/// Phase labels and the percentage reported once each is done.
const BETTING: (&str, u8) = ("Retrieved betting lines", 20);
const CONTEXT: (&str, u8) = ("Retrieved win probability and weather", 30);
const STATS: (&str, u8) = ("Retrieved team performance metrics", 45);
const RATINGS: (&str, u8) = ("Retrieved advanced ratings", 60);
const RECORDS: (&str, u8) = ("Retrieved team records and talent", 75);
const RETURNING: (&str, u8) = ("Retrieved returning production", 85);
const HISTORY: (&str, u8) = ("Retrieved matchup history", 95);
const COMPILED: (&str, u8) = ("Compiled matchup data", 100);

/// Drop the error, keep the slot.
fn absent(res: Fetch) -> Option<Value> {
    res.ok()
}

fn list_of(v: Value) -> Result<Vec<Value>, FetchError> {
    match v {
        Value::Array(list) => Ok(list),
        _ => Err(FetchError::NotFound),
    }
}

fn id_of(v: &Value, key: &str) -> Option<u64> {
    v.get(key).and_then(Value::as_u64)
}

/// Lines for this game only; first sportsbook entry wins.
fn current_lines(api: &ApiClient, game: &Game) -> Fetch {
    let body = api.fetch(Endpoint::Lines, &[
        ("gameId", game.id.to_string()),
        ("year", game.season.to_string()),
    ])?;
    list_of(body)?
        .into_iter()
        .find(|line| id_of(line, "id") == Some(game.id))
        .ok_or(FetchError::NotFound)
}

/// A team's lines for the whole season, ordered by week.
fn betting_history(api: &ApiClient, team: &str, year: i32) -> Fetch {
    let body = api.fetch(Endpoint::Lines, &[("year", year.to_string()), ("team", s!(team))])?;
    let mut lines = list_of(body)?;
    lines.sort_by_key(|l| l.get("week").and_then(Value::as_u64).unwrap_or(0));
    Ok(Value::Array(lines))
}

fn pregame_win_probability(api: &ApiClient, game: &Game) -> Fetch {
    let body = api.fetch(Endpoint::PregameWinProbability, &[
        ("year", game.season.to_string()),
        ("seasonType", game.season_type.clone()),
        ("gameId", game.id.to_string()),
    ])?;
    list_of(body)?
        .into_iter()
        .find(|wp| id_of(wp, "gameId") == Some(game.id))
        .ok_or(FetchError::NotFound)
}

fn per_team(api: &ApiClient, endpoint: Endpoint, team: &str, year: i32) -> Option<Value> {
    absent(api.fetch(endpoint, &[("year", year.to_string()), ("team", s!(team))]))
}

fn season_stats(api: &ApiClient, team: &str, year: i32, exclude_garbage_time: bool) -> Option<Value> {
    let mut params = vec![("year", year.to_string()), ("team", s!(team))];
    if exclude_garbage_time {
        params.push(("excludeGarbageTime", s!("true")));
    }
    absent(api.fetch(Endpoint::SeasonStats, &params))
}

/// `{year, talent}` for one school out of the full talent table.
fn talent_for(table: Option<&Vec<Value>>, team: &str) -> Option<Value> {
    let row = table?
        .iter()
        .find(|t| t.get("school").and_then(Value::as_str) == Some(team))?;
    Some(json!({
        "year": row.get("year").cloned().unwrap_or(Value::Null),
        "talent": row.get("talent").cloned().unwrap_or(Value::Null),
    }))
}

/// Knobs for [`build_matchup_record`].
#[derive(Clone, Copy, Debug)]
pub struct BuildOptions {
    pub exclude_garbage_time: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { exclude_garbage_time: true }
    }
}

/// Run every sub-fetch for `game` in order and assemble the record.
/// Never fails: a failed sub-fetch is a `null` field.
pub fn build_matchup_record(
    api: &ApiClient,
    game: &Game,
    opts: BuildOptions,
    mut progress: Option<&mut dyn Progress>,
) -> MatchupRecord {
    let year = game.season;
    let home = game.home_team.as_str();
    let away = game.away_team.as_str();

    logf!("Matchup: Begin id={} {}", game.id, game.matchup_label());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Analyzing {}...", game.matchup_label()));
    }

    let mut report = |(label, pct): (&str, u8)| {
        logd!("Matchup: {} ({}%)", label, pct);
        if let Some(p) = progress.as_deref_mut() {
            p.step(label, pct);
        }
    };

    // Betting
    let betting = Betting {
        current_lines: absent(current_lines(api, game)),
        home_team_betting_history: absent(betting_history(api, home, year)),
        away_team_betting_history: absent(betting_history(api, away, year)),
    };
    report(BETTING);

    // Game context
    let pregame_wp = absent(pregame_win_probability(api, game));
    let weather = absent(api.fetch(Endpoint::Weather, &[("gameId", game.id.to_string())]));
    report(CONTEXT);

    let mut home_data = TeamProfile::default();
    let mut away_data = TeamProfile::default();

    // Team performance
    home_data.season_stats = season_stats(api, home, year, opts.exclude_garbage_time);
    away_data.season_stats = season_stats(api, away, year, opts.exclude_garbage_time);
    report(STATS);

    // Ratings
    for (data, team) in [(&mut home_data, home), (&mut away_data, away)] {
        data.sp_ratings = per_team(api, Endpoint::SpRatings, team, year);
        data.fpi_ratings = per_team(api, Endpoint::FpiRatings, team, year);
        data.elo_ratings = per_team(api, Endpoint::EloRatings, team, year);
        data.srs_ratings = per_team(api, Endpoint::SrsRatings, team, year);
        data.ppa_ratings = per_team(api, Endpoint::PpaRatings, team, year);
    }
    report(RATINGS);

    // Records + talent
    home_data.record = per_team(api, Endpoint::Records, home, year);
    away_data.record = per_team(api, Endpoint::Records, away, year);
    let talent = api
        .fetch(Endpoint::Talent, &[("year", year.to_string())])
        .and_then(list_of)
        .ok();
    home_data.talent_ranking = talent_for(talent.as_ref(), home);
    away_data.talent_ranking = talent_for(talent.as_ref(), away);
    report(RECORDS);

    // Returning production
    home_data.returning_production = per_team(api, Endpoint::ReturningProduction, home, year);
    away_data.returning_production = per_team(api, Endpoint::ReturningProduction, away, year);
    report(RETURNING);

    // Head-to-head + box score
    let matchup_history = absent(api.fetch(Endpoint::Matchup, &[
        ("team1", s!(home)),
        ("team2", s!(away)),
    ]));
    let advanced_box_score = absent(api.fetch(Endpoint::AdvancedBoxScore, &[
        ("gameId", game.id.to_string()),
    ]));
    report(HISTORY);

    let record = MatchupRecord {
        game_info: GameInfo {
            id: game.id,
            start_date: game.start_date.clone(),
            venue: game.venue.clone(),
            home_team: s!(home),
            away_team: s!(away),
            home_conference: game.home_conference.clone(),
            away_conference: game.away_conference.clone(),
            season_type: game.season_type.clone(),
            weather,
            pregame_win_probability: pregame_wp,
        },
        betting,
        matchup_history,
        advanced_box_score,
        home_team_data: home_data,
        away_team_data: away_data,
        retrieved_at: Utc::now(),
    };
    report(COMPILED);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Matchup: OK id={}", game.id);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn talent_is_picked_per_school() {
        let table = vec![
            json!({"year": 2024, "school": "Georgia", "talent": 1010.2}),
            json!({"year": 2024, "school": "Alabama", "talent": 1001.3}),
        ];
        assert_eq!(
            talent_for(Some(&table), "Alabama"),
            Some(json!({"year": 2024, "talent": 1001.3}))
        );
        assert_eq!(talent_for(Some(&table), "Vanderbilt"), None);
        assert_eq!(talent_for(None, "Alabama"), None);
    }

    #[test]
    fn phases_climb_to_one_hundred() {
        let pcts = [BETTING, CONTEXT, STATS, RATINGS, RECORDS, RETURNING, HISTORY, COMPILED]
            .map(|(_, p)| p);
        assert!(pcts.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(pcts.last(), Some(&100));
    }

    #[test]
    fn non_list_is_not_found() {
        assert!(matches!(list_of(json!({"a": 1})), Err(FetchError::NotFound)));
        assert_eq!(list_of(json!([1, 2])).unwrap().len(), 2);
    }
}
