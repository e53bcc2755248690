//! Tests for best-path tracking and path ranking

#[cfg(test)]
mod tests {
    use maze_markov::MazeMarkovError;
    use maze_markov::chain::index::Coord;
    use maze_markov::chain::matrix::{TransitionMatrix, build_matrix};
    use maze_markov::chain::paths::{Path, cumulative_probability, rank_paths, track_paths};
    use maze_markov::maze::{Direction, Maze};

    fn build(maze: &Maze) -> TransitionMatrix {
        match build_matrix(maze) {
            Ok(matrix) => matrix,
            Err(error) => unreachable!("Maze should build: {error}"),
        }
    }

    fn probabilities(path: &Path) -> Vec<f64> {
        path.steps().iter().map(|step| step.probability).collect()
    }

    #[test]
    fn test_path_accumulates_incremental_probabilities() {
        let path = Path::starting_at(Coord::new(1, 1))
            .extended(Coord::new(1, 2), 0.5)
            .extended(Coord::new(2, 2), 0.25);

        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert!((path.last_probability() - 0.25).abs() < f64::EPSILON);
        assert!((cumulative_probability(&path) - 0.125).abs() < f64::EPSILON);
        assert_eq!(
            path.positions(),
            vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_dead_end_neighbour_is_a_certain_single_hop() {
        let matrix = build(&Maze::fully_open(1, 4));
        let Ok(paths) = track_paths(&matrix, Coord::new(1, 1), Coord::new(1, 2), 1) else {
            unreachable!("Valid tracking should succeed");
        };

        assert_eq!(paths.len(), 1);
        let Some(path) = paths.first() else {
            unreachable!("One path expected");
        };
        assert_eq!(path.positions(), vec![Coord::new(1, 1), Coord::new(1, 2)]);
        assert_eq!(probabilities(path), vec![1.0, 1.0]);
        assert!((path.cumulative_probability() - 1.0).abs() < f64::EPSILON);
    }

    // Tests that a path is recorded only at steps where the goal holds mass
    #[test]
    fn test_paths_recorded_on_steps_with_goal_mass() {
        let matrix = build(&Maze::fully_open(2, 2));
        let Ok(paths) = track_paths(&matrix, Coord::new(1, 1), Coord::new(2, 2), 4) else {
            unreachable!("Valid tracking should succeed");
        };

        // The goal is reachable only on even steps of this bipartite grid
        assert_eq!(paths.len(), 2);
        let lengths: Vec<usize> = paths.iter().map(Path::len).collect();
        assert_eq!(lengths, vec![3, 5]);

        // Equal last-hop probabilities keep the candidate from the lower source index
        let Some(first) = paths.first() else {
            unreachable!("Two paths expected");
        };
        assert_eq!(
            first.positions(),
            vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(2, 2)]
        );
        assert_eq!(probabilities(first), vec![1.0, 0.5, 0.5]);
    }

    // Tests that each destination keeps the incoming move with the highest probability
    // Verified by keeping the last candidate instead of the most probable one
    #[test]
    fn test_destination_keeps_most_probable_last_hop() {
        // (1,1) connects to (1,2) and (2,1); (2,1) also connects to (2,2)
        let mut maze = Maze::new(2, 2);
        maze.set_passage(Coord::new(1, 1), Direction::East, true);
        maze.set_passage(Coord::new(1, 1), Direction::South, true);
        maze.set_passage(Coord::new(2, 1), Direction::East, true);
        let matrix = build(&maze);

        // Start at (2,2) so the dead end (1,2) is reached after the branch (2,1)
        let Ok(paths) = track_paths(&matrix, Coord::new(2, 2), Coord::new(1, 1), 4) else {
            unreachable!("Valid tracking should succeed");
        };

        // Step 2 reaches (1,1) only via (2,1); step 4 can also arrive from the dead end (1,2)
        assert_eq!(paths.len(), 2);
        let Some(last) = paths.last() else {
            unreachable!("Two paths expected");
        };
        assert_eq!(
            last.positions(),
            vec![
                Coord::new(2, 2),
                Coord::new(2, 1),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(1, 1),
            ]
        );
        assert_eq!(probabilities(last), vec![1.0, 1.0, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_unreachable_goal_yields_no_paths() {
        let matrix = build(&Maze::new(2, 2));
        let Ok(paths) = track_paths(&matrix, Coord::new(1, 1), Coord::new(2, 2), 6) else {
            unreachable!("Valid tracking should succeed");
        };

        assert!(paths.is_empty());
    }

    #[test]
    fn test_rank_paths_orders_by_cumulative_probability() {
        let start = Coord::new(1, 1);
        let low = Path::starting_at(start).extended(Coord::new(1, 2), 0.25);
        let high = Path::starting_at(start).extended(Coord::new(2, 1), 0.5);
        let tied = Path::starting_at(start).extended(Coord::new(2, 2), 0.5);

        let ranked = rank_paths(&[low, high, tied], 2);

        assert_eq!(ranked.len(), 2);
        let cells: Vec<Coord> = ranked
            .iter()
            .filter_map(|path| path.positions.last().copied())
            .collect();
        assert_eq!(cells, vec![Coord::new(2, 1), Coord::new(2, 2)]);
        assert!(ranked.iter().all(|path| (path.cumulative_probability - 0.5).abs() < f64::EPSILON));
    }

    #[test]
    fn test_invalid_arguments_are_rejected() {
        let matrix = build(&Maze::fully_open(2, 2));

        assert!(matches!(
            track_paths(&matrix, Coord::new(1, 1), Coord::new(2, 2), 0),
            Err(MazeMarkovError::InvalidParameter { parameter: "steps", .. })
        ));
        assert!(matches!(
            track_paths(&matrix, Coord::new(1, 1), Coord::new(2, 3), 3),
            Err(MazeMarkovError::InvalidParameter { parameter: "goal", .. })
        ));
    }
}
