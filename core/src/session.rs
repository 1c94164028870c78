use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> Playing (first reveal)
/// - Idle -> Won (first reveal clears the board)
/// - Idle -> Lost (unreachable in practice, the first reveal is always safe)
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Board created, mines not placed yet
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// No further moves are accepted, only a reset leaves this state.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from the first click to a win or loss.
///
/// Holds the current [`Grid`] snapshot and replaces it on every move. Timestamps are supplied by the caller so
/// the session stays deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    difficulty: Difficulty,
    config: GameConfig,
    seed: u64,
    grid: Grid,
    status: GameStatus,
    flag_count: CellCount,
    revealed_count: CellCount,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Largest value shown by the fixed-width timer.
    pub const MAX_DISPLAY_SECS: u32 = 999;

    pub fn new(difficulty: Difficulty, custom: Option<GameConfig>, seed: u64) -> Self {
        let config = GameConfig::resolve(difficulty, custom);
        log::debug!(
            "New {} session: {}x{} with {} mines",
            difficulty.label(),
            config.rows(),
            config.cols(),
            config.mines()
        );
        Self {
            difficulty,
            config,
            seed,
            grid: Grid::empty(config.size()),
            status: GameStatus::Idle,
            flag_count: 0,
            revealed_count: 0,
            started_at: None,
            ended_at: None,
        }
    }

    /// Discards this game and starts a fresh one.
    ///
    /// Without a `difficulty` the current one is kept, and so is the current board unless a `custom` board is
    /// given.
    pub fn reset(&self, difficulty: Option<Difficulty>, custom: Option<GameConfig>, seed: u64) -> Self {
        match (difficulty, custom) {
            (Some(difficulty), custom) => Self::new(difficulty, custom, seed),
            (None, Some(custom)) if self.difficulty == Difficulty::Custom => {
                Self::new(Difficulty::Custom, Some(custom), seed)
            }
            (None, _) => Self::new(self.difficulty, Some(self.config), seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only snapshot of the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Configured mines minus placed flags, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines()) - i32::from(self.flag_count)
    }

    /// [`Session::mines_left`] clamped at zero for the counter.
    pub fn mines_left_display(&self) -> u32 {
        self.mines_left().max(0).unsigned_abs()
    }

    /// Seconds since the first reveal, frozen once the game ends.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        match self.started_at {
            Some(started_at) => {
                let secs = (self.ended_at.unwrap_or(now) - started_at).num_seconds();
                secs.clamp(0, u32::MAX.into()) as u32
            }
            None => 0,
        }
    }

    /// [`Session::elapsed_secs`] clamped to the fixed-width timer.
    pub fn elapsed_display(&self, now: DateTime<Utc>) -> u32 {
        self.elapsed_secs(now).min(Self::MAX_DISPLAY_SECS)
    }

    /// Primary activation. The first reveal lays out the mines around `coords`.
    pub fn reveal(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.status.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        let next = if self.status.is_idle() {
            let placed = self.grid.place_mines(self.config.mines(), coords, self.seed)?;
            self.status = GameStatus::Playing;
            self.started_at = Some(now);
            log::debug!("Game started at {:?}", coords);
            placed.reveal(coords)?
        } else {
            self.grid.reveal(coords)?
        };

        Ok(self.apply(next, now))
    }

    /// Compound activation, see [`Grid::chord_reveal`].
    pub fn chord_reveal(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if !self.status.is_playing() {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.grid.is_chordable(coords) {
            log::trace!("Chord at {:?} ignored", coords);
            return Ok(RevealOutcome::NoChange);
        }

        let next = self.grid.chord_reveal(coords)?;
        Ok(self.apply(next, now))
    }

    /// Secondary activation, only accepted while playing.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if !self.status.is_playing() || self.grid[coords].revealed {
            return Ok(MarkOutcome::NoChange);
        }

        self.grid = self.grid.toggle_flag(coords)?;
        self.refresh_counts();
        Ok(MarkOutcome::Changed)
    }

    fn apply(&mut self, next: Grid, now: DateTime<Utc>) -> RevealOutcome {
        let previously_revealed = self.revealed_count;

        let (next, outcome) = if next.is_lost() {
            self.finish(GameStatus::Lost, now);
            (next.reveal_all_mines(), RevealOutcome::HitMine)
        } else if next.is_won() {
            self.finish(GameStatus::Won, now);
            (next, RevealOutcome::Won)
        } else if next.revealed_count() != previously_revealed {
            (next, RevealOutcome::Revealed)
        } else {
            (next, RevealOutcome::NoChange)
        };

        self.grid = next;
        self.refresh_counts();
        outcome
    }

    fn finish(&mut self, status: GameStatus, now: DateTime<Utc>) {
        log::debug!("Game finished: {:?}", status);
        self.status = status;
        self.ended_at = Some(now);
    }

    fn refresh_counts(&mut self) {
        self.flag_count = self.grid.flag_count();
        self.revealed_count = self.grid.revealed_count();
    }
}
