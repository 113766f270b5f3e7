/// One arrow-key step across the gallery grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridStep {
    Left,
    Right,
    Up,
    Down,
}

/// Index reached from `ix` by one step in a grid of `columns` columns holding
/// `len` cells.
///
/// Left/Right walk the sequence and stop at either end. Up/Down jump a full row
/// and stay put when that row does not reach the column.
pub fn grid_step(ix: usize, step: GridStep, columns: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let ix = ix.min(len - 1);

    match step {
        GridStep::Left => ix.saturating_sub(1),
        GridStep::Right => (ix + 1).min(len - 1),
        GridStep::Up => ix.checked_sub(columns).unwrap_or(ix),
        GridStep::Down => {
            let below = ix + columns;
            if below < len { below } else { ix }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_steps_stop_at_ends() {
        assert_eq!(grid_step(0, GridStep::Left, 5, 7), 0);
        assert_eq!(grid_step(3, GridStep::Left, 5, 7), 2);
        assert_eq!(grid_step(6, GridStep::Right, 5, 7), 6);
        // Right from the end of a row wraps onto the next row.
        assert_eq!(grid_step(4, GridStep::Right, 5, 7), 5);
    }

    #[test]
    fn vertical_steps_jump_rows() {
        assert_eq!(grid_step(1, GridStep::Down, 5, 7), 6);
        assert_eq!(grid_step(6, GridStep::Up, 5, 7), 1);
        assert_eq!(grid_step(2, GridStep::Up, 5, 7), 2);
        // Row below is too short to reach column 3.
        assert_eq!(grid_step(3, GridStep::Down, 5, 7), 3);
    }

    #[test]
    fn degenerate_grids() {
        assert_eq!(grid_step(0, GridStep::Right, 5, 0), 0);
        assert_eq!(grid_step(9, GridStep::Left, 5, 3), 1);
        assert_eq!(grid_step(0, GridStep::Down, 0, 3), 1);
    }
}
