use thiserror::Error;

/// Why a position encoding could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {width} squares")]
    RankWidth { rank: usize, width: usize },
    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),
    #[error("bad move number '{0}'")]
    MoveNumber(String),
}

/// Why a move token was not applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("malformed move token '{0}'")]
    Malformed(String),
    #[error("illegal move {0}")]
    Illegal(String),
    #[error("move {0} leaves the king in check")]
    SelfCheck(String),
}
