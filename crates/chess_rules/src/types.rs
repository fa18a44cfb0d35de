use serde::{Deserialize, Serialize};

/// Initial capacity of a move list: a queen sweep plus castling slack.
pub const MOVE_LIST_CAPACITY: usize = 28;

/// Moves generated from one square, in generation order.
pub type MoveList = Vec<Move>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// No player: empty squares, draws, undecided games.
    #[default]
    None,
    White,
    Black,
}

impl Player {
    pub fn enemy(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
            Player::None => Player::None,
        }
    }

    /// Rank step of this player's pawns.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Player::Black => -1,
            _ => 1,
        }
    }

    pub fn pawn_start_rank(self) -> i8 {
        match self {
            Player::Black => 6,
            _ => 1,
        }
    }

    /// Rank on which this player's pawns promote.
    pub fn promotion_rank(self) -> i8 {
        match self {
            Player::Black => 0,
            _ => 7,
        }
    }

    /// Rank the player's king and rooks start on.
    pub fn home_rank(self) -> i8 {
        match self {
            Player::Black => 7,
            _ => 0,
        }
    }
}

/// Opposite player; `None` maps to `None`.
pub fn enemy_of(player: Player) -> Player {
    player.enemy()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    #[default]
    None,
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

/// Public view of a square: what stands there and who owns it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::None,
        owner: Player::None,
    };

    pub fn new(kind: PieceKind, owner: Player) -> Self {
        Self { kind, owner }
    }

    pub fn is_empty(self) -> bool {
        self.kind == PieceKind::None
    }
}

/// Board coordinate. `(0, 0)` is White's queenside rook corner.
///
/// Any pair is representable; pairs outside `0..8` are simply off the board
/// and read as empty everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    pub fn is_valid(self) -> bool {
        (0..8).contains(&self.file) && (0..8).contains(&self.rank)
    }

    pub fn offset(self, df: i8, dr: i8) -> Self {
        Self {
            file: self.file.saturating_add(df),
            rank: self.rank.saturating_add(dr),
        }
    }

    /// All 64 on-board squares, file-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8).flat_map(|file| (0..8).map(move |rank| Position::new(file, rank)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub is_capture: bool,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            is_capture: false,
            is_castling: false,
            is_en_passant: false,
        }
    }

    pub fn capture(from: Position, to: Position) -> Self {
        Self {
            is_capture: true,
            ..Self::new(from, to)
        }
    }

    pub fn castling(from: Position, to: Position) -> Self {
        Self {
            is_castling: true,
            ..Self::new(from, to)
        }
    }

    pub fn en_passant(from: Position, to: Position) -> Self {
        Self {
            is_capture: true,
            is_en_passant: true,
            ..Self::new(from, to)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    AwaitingMove,
    AwaitingPromotion,
    Ended,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
