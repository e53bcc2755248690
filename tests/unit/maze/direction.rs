//! Tests for compass directions and boundary-aware stepping

#[cfg(test)]
mod tests {
    use maze_markov::chain::index::Coord;
    use maze_markov::maze::Direction;

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn test_offsets_and_labels_are_distinct() {
        let offsets: Vec<usize> = Direction::ALL.iter().map(|d| d.offset()).collect();
        let labels: String = Direction::ALL.iter().map(|d| d.label()).collect();

        assert_eq!(offsets, vec![0, 1, 2, 3]);
        assert_eq!(labels, "NSEW");
    }

    // Tests that every direction honours its own grid boundary
    // Verified by replacing `row < rows` with `row <= rows`
    #[test]
    fn test_step_respects_grid_bounds() {
        let (rows, cols) = (3, 4);
        let corner = Coord::new(1, 1);
        let far_corner = Coord::new(3, 4);

        assert_eq!(Direction::North.step(corner, rows, cols), None);
        assert_eq!(Direction::West.step(corner, rows, cols), None);
        assert_eq!(Direction::South.step(corner, rows, cols), Some(Coord::new(2, 1)));
        assert_eq!(Direction::East.step(corner, rows, cols), Some(Coord::new(1, 2)));

        assert_eq!(Direction::South.step(far_corner, rows, cols), None);
        assert_eq!(Direction::East.step(far_corner, rows, cols), None);
        assert_eq!(Direction::North.step(far_corner, rows, cols), Some(Coord::new(2, 4)));
        assert_eq!(Direction::West.step(far_corner, rows, cols), Some(Coord::new(3, 3)));
    }
}
