use crate::board::Board;

/// One compiled-in level: grid width plus row-major digit values.
pub struct Level {
    pub width: usize,
    pub values: &'static [u8],
}

impl Level {
    /// Fresh board with nothing cleared.
    pub fn board(&self) -> Board {
        Board::new(self.width, self.values.to_vec())
    }
}

/// The thirty boards of the game, in play order. Navigation wraps around
/// both ends.
pub const LEVELS: &[Level] = &[
    Level { width: 5, values: &[6, 3, 2, 2, 3, 4, 3, 2, 4, 1, 1, 7, 1, 3, 6, 1, 6, 4, 7, 2, 3, 1, 3, 3, 2] },
    Level { width: 5, values: &[5, 1, 1, 1, 6, 5, 7, 1, 1, 2, 5, 4, 7, 1, 2, 5, 6, 4, 2, 5, 8, 2, 2, 2, 5] },
    Level { width: 5, values: &[8, 2, 2, 1, 9, 3, 1, 2, 5, 5, 3, 4, 5, 4, 4, 4, 5, 1, 1, 1, 7, 3, 2, 1, 7] },
    Level { width: 5, values: &[2, 5, 7, 3, 7, 8, 5, 3, 9, 1, 2, 6, 4, 7, 3, 8, 3, 7, 4, 6, 5, 5, 1, 2, 7] },
    Level { width: 5, values: &[5, 7, 2, 2, 6, 5, 3, 2, 7, 1, 1, 1, 1, 1, 9, 7, 6, 1, 2, 7, 6, 4, 4, 2, 8] },
    Level { width: 5, values: &[1, 7, 1, 1, 2, 4, 4, 5, 1, 8, 6, 2, 2, 2, 4, 2, 5, 1, 2, 2, 9, 1, 4, 6, 8] },
    Level { width: 5, values: &[2, 6, 2, 1, 9, 2, 4, 2, 2, 2, 2, 1, 4, 3, 8, 3, 1, 3, 5, 1, 7, 2, 8, 8, 2] },
    Level { width: 5, values: &[5, 3, 5, 1, 7, 5, 1, 1, 1, 1, 3, 3, 1, 2, 7, 1, 3, 2, 5, 2, 3, 2, 2, 3, 1] },
    Level { width: 5, values: &[2, 8, 9, 1, 4, 7, 1, 1, 1, 1, 3, 7, 3, 7, 1, 1, 3, 1, 5, 4, 6, 4, 4, 2, 4] },
    Level { width: 5, values: &[6, 3, 7, 3, 5, 4, 4, 5, 5, 2, 3, 3, 2, 1, 2, 3, 7, 5, 2, 8, 4, 4, 2, 3, 7] },
    Level { width: 5, values: &[1, 4, 1, 4, 6, 2, 2, 4, 2, 4, 5, 5, 2, 4, 6, 8, 2, 2, 7, 1, 5, 5, 6, 1, 1] },
    Level { width: 5, values: &[3, 3, 1, 3, 1, 3, 8, 2, 3, 3, 1, 7, 2, 5, 5, 5, 2, 8, 2, 2, 5, 4, 6, 2, 4] },
    Level { width: 5, values: &[1, 1, 8, 6, 4, 2, 3, 2, 3, 1, 1, 7, 3, 7, 1, 8, 1, 7, 9, 2, 1, 2, 3, 1, 6] },
    Level { width: 5, values: &[4, 4, 4, 3, 3, 2, 4, 2, 1, 3, 4, 2, 2, 6, 1, 5, 9, 1, 1, 3, 5, 1, 2, 6, 2] },
    Level { width: 5, values: &[8, 2, 5, 4, 1, 6, 1, 4, 2, 2, 4, 3, 2, 7, 3, 7, 5, 4, 2, 8, 3, 1, 6, 8, 2] },
    Level { width: 5, values: &[4, 6, 3, 3, 4, 5, 5, 4, 1, 4, 3, 3, 1, 1, 9, 4, 7, 5, 5, 4, 3, 6, 3, 1, 6] },
    Level { width: 5, values: &[9, 8, 2, 4, 6, 1, 1, 9, 9, 1, 6, 1, 1, 2, 5, 8, 2, 4, 6, 1, 1, 6, 2, 1, 4] },
    Level { width: 5, values: &[6, 5, 2, 5, 1, 4, 5, 2, 1, 9, 8, 4, 1, 9, 1, 2, 1, 4, 9, 1, 5, 5, 1, 2, 7] },
    Level { width: 5, values: &[1, 1, 5, 2, 6, 1, 9, 5, 1, 3, 9, 4, 1, 1, 5, 1, 1, 4, 2, 4, 5, 4, 1, 2, 2] },
    Level { width: 5, values: &[1, 9, 8, 2, 2, 2, 4, 2, 2, 8, 1, 5, 2, 2, 2, 6, 2, 5, 3, 6, 4, 4, 2, 4, 2] },
    Level { width: 5, values: &[4, 3, 3, 9, 1, 5, 7, 4, 3, 3, 5, 3, 8, 1, 1, 3, 3, 2, 2, 5, 4, 6, 1, 9, 5] },
    Level { width: 5, values: &[1, 4, 5, 9, 4, 1, 3, 5, 1, 6, 1, 5, 5, 6, 4, 1, 2, 5, 2, 2, 8, 2, 6, 4, 8] },
    Level { width: 5, values: &[2, 9, 3, 2, 6, 8, 1, 2, 3, 4, 1, 1, 1, 7, 1, 3, 1, 7, 3, 1, 7, 9, 2, 8, 8] },
    Level { width: 5, values: &[2, 2, 4, 2, 2, 3, 2, 2, 3, 7, 3, 8, 2, 1, 2, 1, 3, 3, 5, 3, 3, 8, 2, 4, 3] },
    Level { width: 5, values: &[3, 1, 6, 3, 5, 6, 3, 1, 1, 1, 4, 1, 3, 2, 4, 8, 1, 5, 1, 3, 2, 3, 1, 9, 3] },
    Level { width: 5, values: &[3, 2, 5, 7, 3, 1, 8, 5, 7, 3, 3, 4, 4, 2, 6, 3, 8, 2, 9, 2, 4, 4, 2, 1, 2] },
    Level { width: 5, values: &[6, 4, 3, 1, 2, 4, 4, 4, 5, 5, 4, 1, 1, 1, 3, 6, 8, 2, 1, 5, 5, 5, 5, 2, 3] },
    Level { width: 5, values: &[2, 8, 5, 5, 6, 9, 4, 3, 3, 4, 1, 9, 1, 8, 2, 5, 2, 5, 5, 2, 5, 8, 7, 3, 8] },
    Level { width: 5, values: &[4, 2, 4, 1, 3, 1, 2, 5, 1, 5, 1, 6, 2, 7, 2, 3, 3, 3, 1, 1, 3, 1, 8, 2, 9] },
    Level { width: 5, values: &[2, 8, 1, 3, 1, 4, 1, 5, 5, 5, 1, 4, 2, 2, 6, 8, 4, 6, 5, 2, 2, 5, 5, 5, 8] },
];
