// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    config::consts::OUTPUT_PREFIX,
    core::sanitize::team_file_fragment,
    error::Result,
    games::Game,
};

/// `matchup_data_<away>_<home>.json`
pub fn output_filename(game: &Game) -> String {
    format!(
        "{}_{}_{}.json",
        OUTPUT_PREFIX,
        team_file_fragment(&game.away_team),
        team_file_fragment(&game.home_team)
    )
}

/// Pretty JSON with 2-space indentation, trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"  "));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `record` for `game` into `dir`. Returns the final path written to.
pub fn save_matchup<T: Serialize>(dir: &Path, game: &Game, record: &T) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(output_filename(game));

    let bytes = to_pretty_json(record)?;
    let mut f = fs::File::create(&path)?;
    f.write_all(&bytes)?;
    f.flush()?;

    logf!("Export: wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(crate::error::Error::Usage(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game() -> Game {
        serde_json::from_value(json!({
            "id": 7, "season": 2024, "week": 7,
            "home_team": "Ohio State", "away_team": "Penn State"
        }))
        .unwrap()
    }

    #[test]
    fn filename_is_away_then_home() {
        assert_eq!(output_filename(&game()), "matchup_data_Penn_State_Ohio_State.json");
    }

    #[test]
    fn indentation_is_two_spaces() {
        let out = to_pretty_json(&json!({"a": {"b": null}})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"a\": {\n    \"b\": null\n  }\n}\n");
    }

    #[test]
    fn save_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("outputs").join("nested");
        let path = save_matchup(&dir, &game(), &json!({"ok": true})).unwrap();
        assert!(path.ends_with("matchup_data_Penn_State_Ohio_State.json"));
        let back: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back, json!({"ok": true}));
    }

    #[test]
    fn file_in_place_of_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("outputs");
        fs::write(&blocker, "x").unwrap();
        assert!(save_matchup(&blocker, &game(), &json!({})).is_err());
    }
}
