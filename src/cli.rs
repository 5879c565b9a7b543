// src/cli.rs
use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::{
    client::ApiClient,
    config::{AppOptions, Credential, CredentialStore, consts::API_KEY_URL},
    error::{Error, Result},
    file,
    games::Game,
    matchup::{BuildOptions, build_matchup_record},
    progress::Progress,
};

const RULE: &str = "------------------------------------------------------------";

pub fn run() -> Result<()> {
    let Some(options) = parse_args(env::args().skip(1))? else {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    };

    let store = CredentialStore::new(&options.credential_file);
    let client = ApiClient::new(&options.api, store.load())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(client) = ensure_credential(client, &store, &mut input, &mut out)? else {
        return Ok(());
    };
    run_session(&client, &options, &mut input, &mut out)?;
    Ok(())
}

/// `None` means help was asked for.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<AppOptions>> {
    let mut options = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "-o" | "--out" => options.output.dir = PathBuf::from(value(&a)?),
            "--division" => options.api.division = Some(value(&a)?.to_ascii_lowercase()),
            "--all-divisions" => options.api.division = None,
            "--config" => options.credential_file = PathBuf::from(value(&a)?),
            "--base-url" => options.api.base_url = value(&a)?,
            "--include-garbage-time" => options.api.exclude_garbage_time = false,
            "-h" | "--help" => return Ok(None),
            _ => return Err(Error::Usage(format!("Unknown arg: {}", a))),
        }
    }

    Ok(Some(options))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = s!();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keep the stored key if it works; otherwise ask until one does and save it.
/// `None` when input runs out first.
pub fn ensure_credential<R: BufRead, W: Write>(
    client: ApiClient,
    store: &CredentialStore,
    input: &mut R,
    out: &mut W,
) -> Result<Option<ApiClient>> {
    if client.validate_credential(client.credential()) {
        return Ok(Some(client));
    }

    loop {
        writeln!(out, "\nCFBD API key not found or invalid.")?;
        writeln!(out, "You can get an API key from {API_KEY_URL}")?;
        write!(out, "Please enter your CFBD API key: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else { return Ok(None) };
        let key = Credential::new(line);

        if client.validate_credential(&key) {
            store.save(&key)?;
            writeln!(out, "API key saved successfully!")?;
            return Ok(Some(client.with_credential(key)));
        }
        writeln!(out, "Invalid API key. Please try again.")?;
    }
}

pub fn display_games<W: Write>(out: &mut W, games: &[Game]) -> io::Result<()> {
    writeln!(out, "\nAvailable Games:")?;
    writeln!(out, "{RULE}")?;
    for (i, g) in games.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, g.matchup_label())?;
    }
    writeln!(out, "{RULE}")
}

/// 0-based index of the chosen game, or `None` for 0 / end of input.
pub fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    count: usize,
) -> Result<Option<usize>> {
    loop {
        write!(out, "\nSelect a game number (or 0 to exit): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else { return Ok(None) };
        match line.parse::<i64>() {
            Ok(0) => return Ok(None),
            Ok(n) => match usize::try_from(n) {
                Ok(pick) if pick <= count => return Ok(Some(pick - 1)),
                _ => writeln!(out, "Invalid selection. Please try again.")?,
            },
            Err(_) => writeln!(out, "Please enter a valid number.")?,
        }
    }
}

/// Prints one line per phase.
struct ConsoleProgress<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> Progress for ConsoleProgress<'_, W> {
    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }
    fn step(&mut self, label: &str, percent: u8) {
        let _ = writeln!(self.out, "  [{percent:>3}%] {label}");
    }
}

/// Current week → menu → pick → analyze → save.
/// Returns the written file, or `None` when the user backed out or there was nothing to pick.
pub fn run_session<R: BufRead, W: Write>(
    client: &ApiClient,
    options: &AppOptions,
    input: &mut R,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    let period = client.resolve_current_period();
    writeln!(out, "\nGetting games for {}", period.label())?;

    let games = client.list_games(
        period.year,
        period.week,
        &period.season_type,
        options.api.division.as_deref(),
    );
    if games.is_empty() {
        writeln!(out, "No games found for the current week.")?;
        return Ok(None);
    }

    display_games(out, &games)?;

    let Some(ix) = prompt_selection(input, out, games.len())? else {
        logd!("CLI: exit without selection");
        return Ok(None);
    };
    let game = &games[ix];

    writeln!(out, "\nGathering comprehensive data for {}...", game.matchup_label())?;
    let opts = BuildOptions { exclude_garbage_time: options.api.exclude_garbage_time };
    let record = {
        let mut progress = ConsoleProgress { out: &mut *out };
        build_matchup_record(client, game, opts, Some(&mut progress))
    };

    let path = file::save_matchup(&options.output.dir, game, &record)?;
    writeln!(out, "\nComprehensive matchup data saved to {}", path.display())?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let o = parse_args(args(&[])).unwrap().unwrap();
        assert_eq!(o, AppOptions::default());
    }

    #[test]
    fn flags_override_defaults() {
        let o = parse_args(args(&[
            "-o", "out/here", "--division", "FCS", "--config", "k.json",
            "--include-garbage-time", "--base-url", "http://localhost:9",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(o.output.dir, PathBuf::from("out/here"));
        assert_eq!(o.api.division.as_deref(), Some("fcs"));
        assert_eq!(o.credential_file, PathBuf::from("k.json"));
        assert!(!o.api.exclude_garbage_time);
        assert_eq!(o.api.base_url, "http://localhost:9");

        let o = parse_args(args(&["--all-divisions"])).unwrap().unwrap();
        assert!(o.api.division.is_none());
    }

    #[test]
    fn help_and_bad_args() {
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
        assert!(matches!(parse_args(args(&["--nope"])), Err(Error::Usage(_))));
        assert!(matches!(parse_args(args(&["-o"])), Err(Error::Usage(_))));
    }

    #[test]
    fn selection_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n9\n\n2\n");
        let mut out = Vec::new();
        let pick = prompt_selection(&mut input, &mut out, 3).unwrap();
        assert_eq!(pick, Some(1));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please enter a valid number.").count(), 2);
        assert_eq!(text.matches("Invalid selection.").count(), 1);
    }

    #[test]
    fn negative_pick_is_out_of_range() {
        let mut input = Cursor::new("-1\n1\n");
        let mut out = Vec::new();
        assert_eq!(prompt_selection(&mut input, &mut out, 3).unwrap(), Some(0));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Invalid selection. Please try again.").count(), 1);
        assert!(!text.contains("Please enter a valid number."));
    }

    #[test]
    fn zero_or_eof_exits() {
        let mut out = Vec::new();
        assert_eq!(prompt_selection(&mut Cursor::new("0\n"), &mut out, 3).unwrap(), None);
        assert_eq!(prompt_selection(&mut Cursor::new(""), &mut out, 3).unwrap(), None);
    }

    #[test]
    fn menu_is_numbered_from_one() {
        let games: Vec<Game> = serde_json::from_value(serde_json::json!([
            { "id": 1, "season": 2024, "week": 1, "home_team": "Texas", "away_team": "Colorado State" },
            { "id": 2, "season": 2024, "week": 1, "home_team": "Georgia", "away_team": "Clemson" },
        ]))
        .unwrap();
        let mut out = Vec::new();
        display_games(&mut out, &games).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Colorado State @ Texas\n"));
        assert!(text.contains("2. Clemson @ Georgia\n"));
    }
}
