/// Number of table rows used for `entries` entries in `columns` columns.
///
/// This is `entries / columns + entries % columns`, which exceeds
/// `ceil(entries / columns)` whenever the remainder is above one. The
/// resulting table shape is part of the rendered output and is kept.
pub fn row_count_for(entries: usize, columns: usize) -> usize {
    entries / columns + entries % columns
}

/// One cell of the rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub text: String,
    /// Position of the entry in the input sequence
    pub index: usize,
    /// Reveal order when cells fade in one by one
    pub fragment_index: Option<usize>,
}

/// Entries filled column by column, emitted row by row.
///
/// Rows hold only the cells that have an entry, nothing is padded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Vec<GridCell>>,
    pub row_count: usize,
    pub columns: usize,
}

impl Grid {
    /// Lay `entries` out in `columns` columns.
    ///
    /// The entry at index `i` lands in row `i % row_count` and column
    /// `i / row_count`. `columns` must be at least 1.
    pub fn layout<S: AsRef<str>>(entries: &[S], columns: usize, fade_in: bool) -> Self {
        debug_assert!(columns > 0, "number of columns must be positive");
        let columns = columns.max(1);
        let total = entries.len();
        let row_count = row_count_for(total, columns);

        let mut fragment_counter = 0;
        let mut rows = Vec::with_capacity(row_count);
        for row in 0..row_count {
            let mut cells = Vec::new();
            for col in 0..columns {
                let index = row + col * row_count;
                if index >= total {
                    break;
                }

                let fragment_index = fade_in.then(|| {
                    let current = fragment_counter;
                    fragment_counter += 1;
                    current
                });

                cells.push(GridCell {
                    text: entries[index].as_ref().to_string(),
                    index,
                    fragment_index,
                });
            }
            rows.push(cells);
        }

        Self {
            rows,
            row_count,
            columns,
        }
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the cells back column by column, recovering the input order.
    ///
    /// Cells of a row are contiguous from the first column, so a cell's
    /// position in its row is its column.
    pub fn entries_column_major(&self) -> Vec<&str> {
        let mut entries = Vec::with_capacity(self.len());
        for col in 0..self.columns {
            for row in &self.rows {
                if let Some(cell) = row.get(col) {
                    entries.push(cell.text.as_str());
                }
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(row: &[GridCell]) -> Vec<&str> {
        row.iter().map(|cell| cell.text.as_str()).collect()
    }

    #[test]
    fn test_row_count_formula() {
        assert_eq!(row_count_for(5, 2), 3);
        assert_eq!(row_count_for(4, 2), 2);
        assert_eq!(row_count_for(7, 4), 4);
        assert_eq!(row_count_for(3, 1), 3);
        assert_eq!(row_count_for(0, 3), 0);
    }

    #[test]
    fn test_five_entries_in_two_columns() {
        let grid = Grid::layout(&["Intro", "A", "B", "C", "D"], 2, false);

        assert_eq!(grid.row_count, 3);
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(texts(&grid.rows[0]), ["Intro", "C"]);
        assert_eq!(texts(&grid.rows[1]), ["A", "D"]);
        assert_eq!(texts(&grid.rows[2]), ["B"]);
    }

    #[test]
    fn test_empty_input_gives_empty_grid() {
        let entries: [&str; 0] = [];
        let grid = Grid::layout(&entries, 2, true);
        assert!(grid.rows.is_empty());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_no_entry_dropped_when_rows_exceed_ceiling() {
        // 7 entries, 4 columns: 4 rows, the last column stays empty
        let entries: Vec<String> = (0..7).map(|i| format!("e{}", i)).collect();
        let grid = Grid::layout(&entries, 4, false);

        assert_eq!(grid.row_count, 4);
        assert_eq!(grid.len(), 7);
        assert_eq!(texts(&grid.rows[0]), ["e0", "e4"]);
        assert_eq!(texts(&grid.rows[3]), ["e3"]);
    }

    #[test]
    fn test_column_major_round_trip() {
        for total in 0..12 {
            for columns in 1..5 {
                let entries: Vec<String> = (0..total).map(|i| format!("entry {}", i)).collect();
                let grid = Grid::layout(&entries, columns, false);

                assert_eq!(grid.len(), total);
                assert_eq!(grid.entries_column_major(), entries);
                for (row, cells) in grid.rows.iter().enumerate() {
                    for (col, cell) in cells.iter().enumerate() {
                        assert_eq!(cell.index, row + col * grid.row_count);
                    }
                }
            }
        }
    }

    #[test]
    fn test_fragment_indices_follow_emission_order() {
        let grid = Grid::layout(&["Intro", "A", "B", "C", "D"], 2, true);
        let order: Vec<(usize, Option<usize>)> = grid
            .rows
            .iter()
            .flatten()
            .map(|cell| (cell.index, cell.fragment_index))
            .collect();

        assert_eq!(order, [(0, Some(0)), (3, Some(1)), (1, Some(2)), (4, Some(3)), (2, Some(4))]);
    }

    #[test]
    fn test_no_fragments_without_fade_in() {
        let grid = Grid::layout(&["A", "B"], 2, false);
        assert!(grid.rows.iter().flatten().all(|cell| cell.fragment_index.is_none()));
    }
}
