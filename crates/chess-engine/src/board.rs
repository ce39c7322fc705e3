//! The 8×8 piece grid.

use chess_core::{Color, ColoredPiece, FenParser, Move, Piece, Placement, Square};

/// Piece placement on the board, one cell per square.
///
/// `Board` is a plain value: queries borrow it, and tentative moves are
/// played on a copy (see [`Board::with_move`]) so that a query never leaves
/// the board changed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Placement,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn startpos() -> Self {
        const BACK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, piece) in BACK.iter().enumerate() {
                board.cells[back][col] = Some(piece.with_color(color));
                board.cells[pawns][col] = Some(Piece::Pawn.with_color(color));
            }
        }
        board
    }

    /// Wraps an already-parsed placement grid.
    pub const fn from_placement(cells: Placement) -> Self {
        Board { cells }
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns the owner of the piece on `sq`; `None` for an empty square.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places `piece` on `sq`, returning whatever stood there before.
    pub fn set(&mut self, sq: Square, piece: Option<ColoredPiece>) -> Option<ColoredPiece> {
        std::mem::replace(&mut self.cells[sq.row() as usize][sq.col() as usize], piece)
    }

    /// Moves the piece on `m.from()` to `m.to()` and clears the source.
    ///
    /// Returns the captured piece, if any. No legality checking is done.
    pub fn apply(&mut self, m: Move) -> Option<ColoredPiece> {
        let moving = self.set(m.from(), None);
        self.set(m.to(), moving)
    }

    /// Returns a copy of this board with `m` applied.
    #[must_use]
    pub fn with_move(&self, m: Move) -> Board {
        let mut next = *self;
        next.apply(m);
        next
    }

    /// Iterates over all occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding `color`'s pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.pieces().filter(move |(_, p)| p.belongs_to(color))
    }

    /// Returns true if every square strictly between `from` and `to` is
    /// empty.
    ///
    /// `from` and `to` must share a rank, file or diagonal. Adjacent squares
    /// have nothing between them, so the path is trivially clear.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        debug_assert!(
            from.is_aligned_with(to),
            "{from} and {to} do not share a line"
        );

        let d_row = (to.row() as i8 - from.row() as i8).signum();
        let d_col = (to.col() as i8 - from.col() as i8).signum();

        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            if next == to {
                return true;
            }
            if !self.is_empty(next) {
                return false;
            }
            current = next;
        }
        // Only reachable when from == to or the precondition is violated.
        true
    }

    /// Returns the FEN piece-placement field for this board.
    pub fn to_fen_placement(&self) -> String {
        FenParser::placement_to_fen(&self.cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.to_fen_placement())
    }
}
