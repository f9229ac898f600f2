//! Tests for grid layout queries and shuffling

#[cfg(test)]
mod tests {
    use dungeontiles::spatial::Grid;
    use dungeontiles::spatial::tiles::{Category, Tile};
    use rand::{SeedableRng, rngs::StdRng};

    fn named(names: &[&str]) -> Vec<Tile> {
        names
            .iter()
            .map(|name| Tile::new(*name, format!("{name}.png"), Category::Upper))
            .collect()
    }

    // Tests a new grid starts empty and incomplete
    // Verified by pre-filling rows in the constructor
    #[test]
    fn test_grid_new() {
        let grid = Grid::new(5, 2);

        assert_eq!(grid.width, 5);
        assert_eq!(grid.height, 2);
        assert!(grid.upper.is_empty());
        assert!(grid.bottom_row().next().is_none());
        assert!(!grid.is_complete());
    }

    // Tests the bottom row joins segments left to right
    // Verified by chaining the right segment before the middle
    #[test]
    fn test_bottom_row_order() {
        let tiles = named(&["l", "m1", "m2", "r"]);
        let mut grid = Grid::new(4, 2);
        grid.upper.push(tiles.iter().collect());
        grid.bottom_left = vec![&tiles[0]];
        grid.middle = vec![&tiles[1], &tiles[2]];
        grid.bottom_right = vec![&tiles[3]];

        let order: Vec<&str> = grid.bottom_row().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["l", "m1", "m2", "r"]);
        assert!(grid.is_complete());
    }

    // Tests cell coordinates cover every row
    // Verified by numbering the bottom row as row zero
    #[test]
    fn test_cells_coordinates() {
        let tiles = named(&["a", "b"]);
        let mut grid = Grid::new(2, 3);
        grid.upper.push(vec![&tiles[0], &tiles[1]]);
        grid.upper.push(vec![&tiles[1], &tiles[0]]);
        grid.bottom_left = vec![&tiles[0]];
        grid.bottom_right = vec![&tiles[1]];

        let cells: Vec<(usize, usize, &str)> = grid
            .cells()
            .map(|(col, row, t)| (col, row, t.name.as_str()))
            .collect();

        assert_eq!(
            cells,
            vec![
                (0, 0, "a"),
                (1, 0, "b"),
                (0, 1, "b"),
                (1, 1, "a"),
                (0, 2, "a"),
                (1, 2, "b"),
            ]
        );
    }

    // Tests special counting only looks at the middle segment
    // Verified by counting specials across the whole bottom row
    #[test]
    fn test_special_count() {
        let special = Tile::new("s", "s.png", Category::Middle).with_special(true);
        let plain = Tile::new("p", "p.png", Category::Middle);
        let mut grid = Grid::new(4, 2);
        grid.bottom_left = vec![&special];
        grid.middle = vec![&special, &plain];
        grid.bottom_right = vec![&special];

        assert_eq!(grid.special_count(), 1);
    }

    // Tests row lengths are checked for completeness
    // Verified by only checking the bottom row
    #[test]
    fn test_is_complete_rejects_short_row() {
        let tiles = named(&["a", "b", "c"]);
        let mut grid = Grid::new(3, 2);
        grid.upper.push(vec![&tiles[0], &tiles[1]]);
        grid.bottom_left = vec![&tiles[0]];
        grid.middle = vec![&tiles[1]];
        grid.bottom_right = vec![&tiles[2]];

        assert!(!grid.is_complete());
    }

    // Tests shuffling permutes within each segment only
    // Verified by shuffling the concatenated bottom row
    #[test]
    fn test_shuffle_keeps_segment_contents() {
        let tiles = named(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut grid = Grid::new(8, 2);
        grid.upper.push(tiles.iter().collect());
        grid.bottom_left = vec![&tiles[0], &tiles[1], &tiles[2]];
        grid.middle = vec![&tiles[3], &tiles[4]];
        grid.bottom_right = vec![&tiles[5], &tiles[6], &tiles[7]];

        let mut rng = StdRng::seed_from_u64(11);
        grid.shuffle(&mut rng);

        let sorted = |segment: &Vec<&Tile>| {
            let mut names: Vec<String> = segment.iter().map(|t| t.name.clone()).collect();
            names.sort();
            names
        };
        assert_eq!(sorted(&grid.bottom_left), vec!["a", "b", "c"]);
        assert_eq!(sorted(&grid.middle), vec!["d", "e"]);
        assert_eq!(sorted(&grid.bottom_right), vec!["f", "g", "h"]);
        assert_eq!(
            grid.upper.first().map(sorted),
            Some(vec!["a", "b", "c", "d", "e", "f", "g", "h"]
                .into_iter()
                .map(String::from)
                .collect())
        );
    }
}
