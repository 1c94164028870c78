use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
        Difficulty::Custom,
    ];

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Beginner => "Beginner",
            Intermediate => "Intermediate",
            Expert => "Expert",
            Custom => "Custom",
        }
    }

    /// Fixed board for the preset levels, `None` for [`Difficulty::Custom`].
    pub const fn preset(self) -> Option<GameConfig> {
        use Difficulty::*;
        match self {
            Beginner => Some(GameConfig::BEGINNER),
            Intermediate => Some(GameConfig::INTERMEDIATE),
            Expert => Some(GameConfig::EXPERT),
            Custom => None,
        }
    }
}

/// Board dimensions and mine count of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked(9, 9, 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked(16, 16, 40);
    pub const EXPERT: Self = Self::new_unchecked(16, 30, 99);

    pub const MIN_ROWS: Coord = 5;
    pub const MAX_ROWS: Coord = 30;
    pub const MIN_COLS: Coord = 5;
    pub const MAX_COLS: Coord = 50;

    /// Cells kept clear around the first click.
    pub const SAFE_ZONE_CELLS: CellCount = 9;

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Clamps a user supplied board into playable bounds, leaving room for the safe zone.
    pub fn custom(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        let rows = rows.clamp(Self::MIN_ROWS, Self::MAX_ROWS);
        let cols = cols.clamp(Self::MIN_COLS, Self::MAX_COLS);
        let mines = mines.clamp(1, Self::max_mines(rows, cols));
        Self::new_unchecked(rows, cols, mines)
    }

    /// Resolves the board for `difficulty`, `custom` only applies to [`Difficulty::Custom`].
    pub fn resolve(difficulty: Difficulty, custom: Option<GameConfig>) -> Self {
        match (difficulty.preset(), custom) {
            (Some(preset), _) => preset,
            (None, Some(config)) => config.clamped(),
            (None, None) => Self::BEGINNER,
        }
    }

    pub const fn max_mines(rows: Coord, cols: Coord) -> CellCount {
        let max = mult(rows, cols).saturating_sub(Self::SAFE_ZONE_CELLS);
        if max == 0 { 1 } else { max }
    }

    pub fn clamped(self) -> Self {
        Self::custom(self.rows, self.cols, self.mines)
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    /// `(rows, cols)`
    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::BEGINNER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_boards() {
        assert_eq!(Difficulty::Beginner.preset(), Some(GameConfig::BEGINNER));
        assert_eq!(GameConfig::INTERMEDIATE.size(), (16, 16));
        assert_eq!(GameConfig::EXPERT.size(), (16, 30));
        assert_eq!(GameConfig::EXPERT.mines(), 99);
        assert_eq!(Difficulty::Custom.preset(), None);
    }

    #[test]
    fn custom_dimensions_are_clamped() {
        let small = GameConfig::custom(1, 2, 3);
        assert_eq!(small.size(), (5, 5));

        let large = GameConfig::custom(200, 200, 3);
        assert_eq!(large.size(), (30, 50));
    }

    #[test]
    fn custom_mines_leave_room_for_safe_zone() {
        assert_eq!(GameConfig::custom(5, 5, 100).mines(), 16);
        assert_eq!(GameConfig::custom(10, 10, 0).mines(), 1);
        assert_eq!(GameConfig::custom(10, 10, 15).mines(), 15);
    }

    #[test]
    fn resolve_prefers_presets() {
        let custom = GameConfig::new_unchecked(12, 12, 500);

        assert_eq!(
            GameConfig::resolve(Difficulty::Expert, Some(custom)),
            GameConfig::EXPERT
        );
        assert_eq!(
            GameConfig::resolve(Difficulty::Custom, Some(custom)),
            GameConfig::custom(12, 12, 135)
        );
        assert_eq!(
            GameConfig::resolve(Difficulty::Custom, None),
            GameConfig::BEGINNER
        );
    }
}
