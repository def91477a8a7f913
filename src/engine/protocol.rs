use crate::checkers::core::{Color, Square};

/// Commands understood by [`super::Engine`], one per line.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    Id,
    NewGame,
    SetPosition {
        /// [`None`] stands for the starting position.
        notation: Option<String>,
        side_to_move: Option<Color>,
    },
    Display,
    Moves {
        from: Option<Square>,
    },
    Play {
        from: Square,
        to: Square,
    },
    Winner,
    Quit,
    Unknown(String),
}

impl Command {
    pub(super) fn parse(line: &str) -> Self {
        let line = line.trim();
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["id"] => Self::Id,
            ["new"] => Self::NewGame,
            ["position", rest @ ..] => parse_position(line, rest),
            ["d"] => Self::Display,
            ["moves"] => Self::Moves { from: None },
            ["moves", from] => match Square::try_from(*from) {
                Ok(from) => Self::Moves { from: Some(from) },
                Err(_) => Self::Unknown(line.to_string()),
            },
            ["play", from, to] => match (Square::try_from(*from), Square::try_from(*to)) {
                (Ok(from), Ok(to)) => Self::Play { from, to },
                _ => Self::Unknown(line.to_string()),
            },
            ["winner"] => Self::Winner,
            ["quit"] => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

fn parse_position(line: &str, parts: &[&str]) -> Command {
    let (notation, side_to_move) = match parts {
        ["startpos"] => (None, None),
        ["startpos", color] => (None, Some(*color)),
        [notation] => (Some(*notation), None),
        [notation, color] => (Some(*notation), Some(*color)),
        _ => return Command::Unknown(line.to_string()),
    };
    let side_to_move = match side_to_move.map(Color::try_from).transpose() {
        Ok(side_to_move) => side_to_move,
        Err(_) => return Command::Unknown(line.to_string()),
    };
    Command::SetPosition {
        notation: notation.map(str::to_string),
        side_to_move,
    }
}
