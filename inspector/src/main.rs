extern crate common;
extern crate serde_json;
extern crate thiserror;
extern crate toml;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;
extern crate env_logger;

use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

use common::{parse_square, Board, Error as ModelError, GameState};
use thiserror::Error;

#[derive(Error, Debug)]
enum InspectorError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("writing output failed: {0}")]
    Output(#[from] io::Error),
    #[error("config file incorrectly formatted: {0}")]
    Config(#[from] toml::de::Error),
    #[error("game state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct Config {
    /// JSON game state to check instead of the starting position.
    #[serde(default)]
    state: Option<PathBuf>,
    #[serde(default)]
    pretty: bool,
    #[serde(default)]
    squares: Vec<String>,
}

impl Config {
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, InspectorError> {
        let contents = read_to_string(path.as_ref())?;
        Ok(toml::from_str(&contents)?)
    }
}

fn read_to_string(path: &Path) -> Result<String, InspectorError> {
    let io_error = |source| InspectorError::Io {
        path: path.to_owned(),
        source,
    };
    let mut contents = String::new();
    File::open(path)
        .and_then(|file| BufReader::new(file).read_to_string(&mut contents))
        .map_err(io_error)?;
    Ok(contents)
}

fn load_state(path: &Path) -> Result<GameState, InspectorError> {
    let contents = read_to_string(path)?;
    let state: GameState = serde_json::from_str(contents.trim_end())?;
    info!(
        "Loaded game state from {:?}: {} moves played, {} to move",
        path,
        state.move_history().len(),
        state.current_player
    );
    Ok(state)
}

/// One line describing what sits on `square`.
fn describe(board: &Board, square: &str) -> String {
    match parse_square(square) {
        Ok(pos) => match board.get(pos) {
            Some(piece) => format!(
                "{} ({}, {}): {} {} [{}]",
                square, pos.row, pos.col, piece.color, piece.kind, piece.id
            ),
            None => format!("{} ({}, {}): empty", square, pos.row, pos.col),
        },
        Err(ModelError::OffBoard(_)) => {
            warn!("Square {} is outside the board", square);
            format!("{}: off the board", square)
        }
        Err(e) => {
            warn!("Could not read square {:?}: {}", square, e);
            format!("{}: {}", square, e)
        }
    }
}

fn write_state<W: Write>(
    output: &mut W,
    state: &GameState,
    pretty: bool,
) -> Result<(), InspectorError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *output, state)?;
    } else {
        serde_json::to_writer(&mut *output, state)?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn run(config_path: &str) -> Result<(), InspectorError> {
    let config = Config::from_file(config_path)?;
    debug!("Config: {:?}", config);

    let state = match config.state {
        Some(ref path) => load_state(path)?,
        None => GameState::new(),
    };
    state.validate()?;
    info!("Board:\n{}", state.board);

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    for square in &config.squares {
        writeln!(output, "{}", describe(&state.board, square))?;
    }
    write_state(&mut output, &state, config.pretty)
}

fn main() {
    if let Err(e) = env_logger::init() {
        eprintln!("Could not start logger: {}", e);
    }

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("USAGE: inspector configpath");
        process::exit(1);
    }

    if let Err(e) = run(&args[1]) {
        error!("{}", e);
        eprintln!("inspector: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.state.is_none());
        assert!(!config.pretty);
        assert!(config.squares.is_empty());
    }

    #[test]
    fn config_fields() {
        let config: Config = toml::from_str(
            r#"
            state = "saved.json"
            pretty = true
            squares = ["a1", "f6"]
            "#,
        )
        .unwrap();
        assert_eq!(config.state, Some(PathBuf::from("saved.json")));
        assert!(config.pretty);
        assert_eq!(config.squares, vec!["a1".to_owned(), "f6".to_owned()]);
    }

    #[test]
    fn unknown_config_key_is_an_error() {
        assert!(toml::from_str::<Config>("host = \"127.0.0.1:2826\"").is_err());
    }

    #[test]
    fn describes_squares() {
        let board = Board::initial();
        assert_eq!(describe(&board, "a1"), "a1 (0, 0): white king [white-king]");
        assert_eq!(describe(&board, "a5"), "a5 (4, 0): black pawn [black-pawn-0]");
        assert_eq!(describe(&board, "c3"), "c3 (2, 2): empty");
        assert_eq!(describe(&board, "g1"), "g1: off the board");
        assert!(describe(&board, "A1").starts_with("A1: invalid algebraic notation"));
    }

    #[test]
    fn compact_output_is_one_line() {
        let mut buffer = Vec::new();
        write_state(&mut buffer, &GameState::new(), false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        let decoded: GameState = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, GameState::new());
    }

    #[test]
    fn missing_config_reports_path() {
        match Config::from_file("/nonexistent/inspector.toml") {
            Err(InspectorError::Io { ref path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/inspector.toml"))
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
