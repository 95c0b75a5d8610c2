//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_jeopardy::BoardView;

/// Selected cell, as `(category, clue)` board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column index.
    pub category: usize,
    /// Row index.
    pub clue: usize,
}

/// Moves cursor based on arrow keys, staying on cells that exist.
pub fn move_cursor(cursor: Cursor, key: KeyCode, view: &BoardView) -> Cursor {
    let columns = view.columns();
    if columns == 0 {
        return Cursor::default();
    }

    let moved = match key {
        KeyCode::Left => Cursor {
            category: cursor.category.saturating_sub(1),
            ..cursor
        },
        KeyCode::Right => Cursor {
            category: (cursor.category + 1).min(columns - 1),
            ..cursor
        },
        KeyCode::Up => Cursor {
            clue: cursor.clue.saturating_sub(1),
            ..cursor
        },
        KeyCode::Down => Cursor {
            clue: cursor.clue + 1,
            ..cursor
        },
        _ => cursor,
    };

    // Columns can be short; clamp into the target column.
    let rows = view.rows_in(moved.category);
    if rows == 0 {
        return if view.rows_in(cursor.category) > 0 { cursor } else { moved };
    }
    Cursor {
        clue: moved.clue.min(rows - 1),
        ..moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_jeopardy::CellView;

    fn view(column_heights: &[usize]) -> BoardView {
        BoardView {
            titles: column_heights.iter().map(|h| format!("col{h}")).collect(),
            cells: column_heights
                .iter()
                .map(|&h| vec![CellView::default(); h])
                .collect(),
            missing_categories: 0,
            short_categories: 0,
        }
    }

    #[test]
    fn test_move_within_grid() {
        let view = view(&[5, 5, 5]);
        let start = Cursor::default();
        let right = move_cursor(start, KeyCode::Right, &view);
        assert_eq!(right, Cursor { category: 1, clue: 0 });
        let down = move_cursor(right, KeyCode::Down, &view);
        assert_eq!(down, Cursor { category: 1, clue: 1 });
    }

    #[test]
    fn test_move_stops_at_edges() {
        let view = view(&[5, 5]);
        let corner = Cursor { category: 1, clue: 4 };
        assert_eq!(move_cursor(corner, KeyCode::Right, &view), corner);
        assert_eq!(move_cursor(corner, KeyCode::Down, &view), corner);
        assert_eq!(move_cursor(Cursor::default(), KeyCode::Up, &view), Cursor::default());
        assert_eq!(move_cursor(Cursor::default(), KeyCode::Left, &view), Cursor::default());
    }

    #[test]
    fn test_move_into_short_column_clamps_row() {
        let view = view(&[5, 2]);
        let cursor = Cursor { category: 0, clue: 4 };
        assert_eq!(
            move_cursor(cursor, KeyCode::Right, &view),
            Cursor { category: 1, clue: 1 }
        );
    }

    #[test]
    fn test_empty_board_resets_cursor() {
        let view = view(&[]);
        let cursor = Cursor { category: 3, clue: 2 };
        assert_eq!(move_cursor(cursor, KeyCode::Down, &view), Cursor::default());
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let view = view(&[5]);
        let cursor = Cursor { category: 0, clue: 2 };
        assert_eq!(move_cursor(cursor, KeyCode::Char('x'), &view), cursor);
    }
}
