// src/calendar.rs
//! Which week is "now"?
//!
//! The API's calendar is a list of windows ordered by start, each shaped like
//! `{"week": 3, "seasonType": "regular", "firstGameStart": "...", "lastGameStart": "..."}`.
//! Resolution order, first hit wins:
//!
//! 1. a window whose `[firstGameStart, lastGameStart]` contains now
//!    (windows that fail to parse are skipped here)
//! 2. now is before the first window's start → the first window
//!    (only its `week`, `seasonType` and `firstGameStart` are read)
//! 3. otherwise → the last window (only `week` and `seasonType` are read)
//! 4. anything unusable along the way (not a list, empty, first/last window
//!    malformed) → `{year, 1, "regular"}`

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::config::consts::{FALLBACK_SEASON_TYPE, FALLBACK_WEEK};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub week: u32,
    pub season_type: String,
}

impl Period {
    pub fn fallback(year: i32) -> Self {
        Self { year, week: FALLBACK_WEEK, season_type: s!(FALLBACK_SEASON_TYPE) }
    }

    pub fn label(&self) -> String {
        format!("Week {}, {} ({})", self.week, self.year, self.season_type)
    }
}

/// One calendar entry. Extra fields (v2 adds `startDate`/`endDate`) are ignored.
/// Timestamps may be missing or null; each step checks the ones it needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Window {
    week: u32,
    season_type: String,
    #[serde(default)]
    first_game_start: Option<String>,
    #[serde(default)]
    last_game_start: Option<String>,
}

impl Window {
    fn parse(v: &Value) -> Option<Window> {
        serde_json::from_value(v.clone()).ok()
    }

    fn start(&self) -> Option<DateTime<Utc>> {
        self.first_game_start.as_deref().and_then(parse_ts)
    }

    fn end(&self) -> Option<DateTime<Utc>> {
        self.last_game_start.as_deref().and_then(parse_ts)
    }

    fn period(self, year: i32) -> Period {
        Period { year, week: self.week, season_type: self.season_type }
    }
}

fn parse_ts(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s).ok().map(|t| t.with_timezone(&Utc))
}

/// Resolve the period for `now` from a raw calendar response.
pub fn resolve_period(calendar: &Value, now: DateTime<Utc>) -> Period {
    let year = now.year();

    let weeks = match calendar.as_array() {
        Some(list) if !list.is_empty() => list,
        _ => {
            logw!("Calendar: empty or not a list, using week {FALLBACK_WEEK}");
            return Period::fallback(year);
        }
    };

    // 1. interval match
    for raw in weeks {
        let Some(w) = Window::parse(raw) else { continue };
        let (Some(start), Some(end)) = (w.start(), w.end()) else { continue };
        if start <= now && now <= end {
            return w.period(year);
        }
    }

    // 2. before the season
    let Some(first) = weeks.first().and_then(Window::parse) else {
        logw!("Calendar: first window malformed, using fallback period");
        return Period::fallback(year);
    };
    let Some(first_start) = first.start() else {
        logw!("Calendar: first window has no usable start, using fallback period");
        return Period::fallback(year);
    };
    if now < first_start {
        return first.period(year);
    }

    // 3. after the season (or between windows)
    match weeks.last().and_then(Window::parse) {
        Some(last) => last.period(year),
        None => {
            logw!("Calendar: last window malformed, using fallback period");
            Period::fallback(year)
        }
    }
}
