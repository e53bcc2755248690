//! Tests for bit-packed passage storage

#[cfg(test)]
mod tests {
    use maze_markov::chain::index::Coord;
    use maze_markov::maze::{Adjacency, Direction, Maze};

    #[test]
    fn test_new_maze_is_fully_walled() {
        let maze = Maze::new(3, 2);

        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 2);
        assert_eq!(maze.passage_count(), 0);
        for row in 1..=3 {
            for col in 1..=2 {
                assert_eq!(maze.open_directions(Coord::new(row, col)).count(), 0);
            }
        }
    }

    #[test]
    fn test_set_passage_opens_both_sides() {
        let mut maze = Maze::new(2, 2);

        assert!(maze.set_passage(Coord::new(1, 1), Direction::South, true));
        assert!(maze.is_open(Coord::new(1, 1), Direction::South));
        assert!(maze.is_open(Coord::new(2, 1), Direction::North));
        assert_eq!(maze.passage_count(), 1);

        assert!(maze.set_passage(Coord::new(2, 1), Direction::North, false));
        assert!(!maze.is_open(Coord::new(1, 1), Direction::South));
        assert_eq!(maze.passage_count(), 0);
    }

    #[test]
    fn test_set_passage_refuses_to_leave_the_grid() {
        let mut maze = Maze::new(2, 2);

        assert!(!maze.set_passage(Coord::new(1, 1), Direction::North, true));
        assert!(!maze.set_passage(Coord::new(2, 2), Direction::East, true));
        assert!(!maze.set_passage(Coord::new(5, 5), Direction::North, true));
        assert!(!maze.is_open(Coord::new(1, 1), Direction::North));
    }

    // Tests one-sided flags used to model raw, possibly inconsistent connectivity
    #[test]
    fn test_set_flag_only_touches_one_side() {
        let mut maze = Maze::new(1, 2);

        assert!(maze.set_flag(Coord::new(1, 1), Direction::East, true));
        assert!(maze.is_open(Coord::new(1, 1), Direction::East));
        assert!(!maze.is_open(Coord::new(1, 2), Direction::West));
        assert!(!maze.set_flag(Coord::new(0, 1), Direction::East, true));
    }

    #[test]
    fn test_fully_open_connects_every_neighbour() {
        let maze = Maze::fully_open(3, 3);

        // 3 rows of 2 horizontal walls plus 3 columns of 2 vertical walls
        assert_eq!(maze.passage_count(), 12);

        let corner: Vec<Direction> = maze.open_directions(Coord::new(1, 1)).collect();
        assert_eq!(corner, vec![Direction::South, Direction::East]);

        let centre: Vec<Direction> = maze.open_directions(Coord::new(2, 2)).collect();
        assert_eq!(centre, Direction::ALL.to_vec());
    }

    #[test]
    fn test_out_of_range_queries_are_closed() {
        let maze = Maze::fully_open(2, 2);

        assert!(!maze.contains(Coord::new(0, 1)));
        assert!(!maze.contains(Coord::new(3, 1)));
        assert!(!maze.is_open(Coord::new(3, 1), Direction::North));
        assert_eq!(Adjacency::rows(&maze), 2);
        assert_eq!(Adjacency::cols(&maze), 2);
    }
}
