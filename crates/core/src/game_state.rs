//! Game state module - the session and the loop that drives it
//!
//! [`GameState`] is plain data: board, falling piece, lookahead, score and flags.
//! [`GameLoop`] owns one state plus the [`PieceSource`] and runs every transition:
//!
//! ```text
//! Spawning -> Falling -> (Locking -> Clearing ->) Spawning
//!                 \-> GameOver (spawn blocked) -- reset --> Spawning
//! ```
//!
//! Spawning, locking and clearing complete inside a single call, so the only
//! phases a caller can observe are [`Phase::Falling`] and [`Phase::GameOver`].
//! Pause is a separate flag that freezes everything except pause and reset.

use log::{debug, info};

use crate::board::Board;
use crate::catalog;
use crate::draw::DrawSurface;
use crate::piece::{MoveDown, Piece};
use crate::rng::{PieceSource, SimpleRng};
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    /// The last spawned piece overlapped the stack. Only reset leaves this phase.
    GameOver,
}

/// What a tick or command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Dropped: paused or game over.
    Ignored,
    /// The move or rotation was blocked; nothing changed.
    Rejected,
    Moved,
    Rotated,
    Locked(LockReport),
    /// Pause flag flipped.
    PauseToggled { paused: bool },
    Reset,
}

/// Summary of a lock and the clear/spawn that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockReport {
    pub rows_cleared: u32,
    pub points: u32,
    /// The replacement piece spawned blocked; the game is over.
    pub topped_out: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    piece: Piece,
    next: PieceKind,
    score: u32,
    paused: bool,
    phase: Phase,
    rows_cleared: u32,
    pieces_locked: u32,
}

impl GameState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Lookahead kind (spawns after the current piece locks).
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Rows cleared this session.
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Pieces locked this session.
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Paint locked cells, then the falling piece on top.
    pub fn draw(&self, surface: &mut impl DrawSurface) {
        for (col, row) in self.board.occupied_cells() {
            surface.fill_cell(col, row, LOCKED_CELL_COLOR);
        }
        let color = self.piece.color();
        for (col, row) in self.piece.cells() {
            surface.fill_cell(col, row, color);
        }
    }

    /// Paint the lookahead shape in its own coordinates (top-left at 0,0).
    pub fn draw_preview(&self, surface: &mut impl DrawSurface) {
        let def = catalog::definition(self.next);
        for (col, row) in def.matrix().occupied() {
            surface.fill_cell(col, row, def.color);
        }
    }
}

/// Drives one [`GameState`].
///
/// Each instance is independent; nothing is shared between sessions except the
/// immutable shape catalog.
#[derive(Debug, Clone)]
pub struct GameLoop<R: PieceSource = SimpleRng> {
    state: GameState,
    source: R,
}

impl GameLoop<SimpleRng> {
    /// Default-sized board with a seeded uniform source.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS, SimpleRng::new(seed))
    }
}

impl<R: PieceSource> GameLoop<R> {
    /// Start a session: pick the lookahead, then spawn the first piece from it.
    pub fn new(cols: u16, rows: u16, mut source: R) -> Self {
        let board = Board::new(cols, rows);
        let first = source.next_kind();
        let piece = Piece::spawn(first, &board);
        let mut game = Self {
            state: GameState {
                board,
                piece,
                next: first,
                score: 0,
                paused: false,
                phase: Phase::Falling,
                rows_cleared: 0,
                pieces_locked: 0,
            },
            source,
        };
        game.spawn();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable board access for setting up positions (tests, benches).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.state.board
    }

    fn accepts_input(&self) -> bool {
        !self.state.paused && self.state.phase == Phase::Falling
    }

    /// Create the next piece from the lookahead and draw a new lookahead.
    fn spawn(&mut self) {
        let kind = self.state.next;
        self.state.piece = Piece::spawn(kind, &self.state.board);
        self.state.next = self.source.next_kind();

        if self.state.piece.is_blocked(&self.state.board) {
            info!(
                "game over: {} blocked at spawn, final score {}",
                kind.as_str(),
                self.state.score
            );
            self.state.phase = Phase::GameOver;
        } else {
            debug!(
                "spawned {} at {:?}, next {}",
                kind.as_str(),
                self.state.piece.position(),
                self.state.next.as_str()
            );
        }
    }

    /// Gravity: one row down, locking if blocked.
    pub fn tick(&mut self) -> StepOutcome {
        self.soft_drop()
    }

    pub fn soft_drop(&mut self) -> StepOutcome {
        if !self.accepts_input() {
            return StepOutcome::Ignored;
        }
        match self.state.piece.move_down(&mut self.state.board) {
            MoveDown::Moved => StepOutcome::Moved,
            MoveDown::Locked => StepOutcome::Locked(self.settle()),
        }
    }

    pub fn move_left(&mut self) -> StepOutcome {
        if !self.accepts_input() {
            return StepOutcome::Ignored;
        }
        committed(self.state.piece.move_left(&self.state.board), StepOutcome::Moved)
    }

    pub fn move_right(&mut self) -> StepOutcome {
        if !self.accepts_input() {
            return StepOutcome::Ignored;
        }
        committed(self.state.piece.move_right(&self.state.board), StepOutcome::Moved)
    }

    pub fn rotate(&mut self) -> StepOutcome {
        if !self.accepts_input() {
            return StepOutcome::Ignored;
        }
        committed(self.state.piece.rotate(&self.state.board), StepOutcome::Rotated)
    }

    /// The piece is already merged; clear full rows, score, respawn.
    fn settle(&mut self) -> LockReport {
        self.state.pieces_locked += 1;

        let full = self.state.board.full_rows();
        let mut report = LockReport::default();
        if !full.is_empty() {
            let cleared = self.state.board.clear_rows(&full) as u32;
            report.rows_cleared = cleared;
            report.points = cleared * ROW_CLEAR_POINTS;
            self.state.score += report.points;
            self.state.rows_cleared += cleared;
            debug!(
                "cleared rows {:?} (+{}), score {}",
                full, report.points, self.state.score
            );
        }

        self.spawn();
        report.topped_out = self.state.game_over();
        report
    }

    pub fn toggle_pause(&mut self) -> StepOutcome {
        self.state.paused = !self.state.paused;
        debug!("paused: {}", self.state.paused);
        StepOutcome::PauseToggled {
            paused: self.state.paused,
        }
    }

    /// Empty the board, zero the score and counters, unpause and spawn afresh.
    pub fn reset(&mut self) -> StepOutcome {
        info!("reset (score was {})", self.state.score);
        self.state.board.reset();
        self.state.score = 0;
        self.state.rows_cleared = 0;
        self.state.pieces_locked = 0;
        self.state.paused = false;
        self.state.phase = Phase::Falling;
        self.state.next = self.source.next_kind();
        self.spawn();
        StepOutcome::Reset
    }

    /// Apply a discrete command
    pub fn apply(&mut self, action: GameAction) -> StepOutcome {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
        }
    }
}

fn committed(ok: bool, outcome: StepOutcome) -> StepOutcome {
    if ok {
        outcome
    } else {
        StepOutcome::Rejected
    }
}
