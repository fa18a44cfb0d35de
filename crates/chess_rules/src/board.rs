use crate::types::*;

/// A board cell: the piece plus the ply it last moved on.
///
/// `last_moved_at_ply` is the only move history the engine keeps per piece;
/// castling eligibility reads it as "has this king/rook ever moved".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occupant {
    pub kind: PieceKind,
    pub owner: Player,
    pub last_moved_at_ply: Option<u32>,
}

impl Occupant {
    pub const EMPTY: Occupant = Occupant {
        kind: PieceKind::None,
        owner: Player::None,
        last_moved_at_ply: None,
    };

    /// A piece that has never moved.
    pub fn new(kind: PieceKind, owner: Player) -> Self {
        if kind == PieceKind::None {
            return Self::EMPTY;
        }
        Self {
            kind,
            owner,
            last_moved_at_ply: None,
        }
    }

    /// Same piece, stamped as having moved on `ply`.
    pub fn moved_at(self, ply: u32) -> Self {
        Self {
            last_moved_at_ply: Some(ply),
            ..self
        }
    }

    pub fn piece(self) -> Piece {
        Piece::new(self.kind, self.owner)
    }

    pub fn is_empty(self) -> bool {
        self.kind == PieceKind::None
    }

    pub fn has_moved(self) -> bool {
        self.last_moved_at_ply.is_some()
    }
}

impl From<Piece> for Occupant {
    fn from(piece: Piece) -> Self {
        Occupant::new(piece.kind, piece.owner)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    // [file][rank]
    cells: [[Occupant; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Occupant::EMPTY; 8]; 8],
        }
    }

    pub fn standard() -> Self {
        let mut b = Board::empty();

        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            let file = file as i8;
            b.set_occupant(Position::new(file, 0), Occupant::new(kind, Player::White));
            b.set_occupant(Position::new(file, 7), Occupant::new(kind, Player::Black));
        }
        // Pawns
        for file in 0..8 {
            b.set_occupant(
                Position::new(file, 1),
                Occupant::new(PieceKind::Pawn, Player::White),
            );
            b.set_occupant(
                Position::new(file, 6),
                Occupant::new(PieceKind::Pawn, Player::Black),
            );
        }
        b
    }

    /// Off-board positions read as empty.
    pub fn occupant_at(&self, pos: Position) -> Occupant {
        if !pos.is_valid() {
            return Occupant::EMPTY;
        }
        self.cells[pos.file as usize][pos.rank as usize]
    }

    /// Off-board positions are ignored.
    pub fn set_occupant(&mut self, pos: Position, occupant: Occupant) {
        if !pos.is_valid() {
            return;
        }
        self.cells[pos.file as usize][pos.rank as usize] = occupant;
    }

    pub fn piece_at(&self, pos: Position) -> Piece {
        self.occupant_at(pos).piece()
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.occupant_at(pos).is_empty()
    }

    pub fn is_owned_by(&self, pos: Position, player: Player) -> bool {
        let occ = self.occupant_at(pos);
        !occ.is_empty() && occ.owner == player
    }

    pub fn king_square(&self, player: Player) -> Option<Position> {
        Position::all().find(|&pos| {
            let occ = self.occupant_at(pos);
            occ.kind == PieceKind::King && occ.owner == player
        })
    }

    /// Squares holding a piece of `player`, file-major.
    pub fn squares_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.is_owned_by(pos, player))
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        self.set_occupant(pos, Occupant::EMPTY);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
