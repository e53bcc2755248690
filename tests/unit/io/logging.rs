//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use maze_markov::io::logging::{default_directive, init_logging};

    #[test]
    fn test_verbosity_raises_log_level() {
        assert_eq!(default_directive(0), "maze_markov=warn");
        assert_eq!(default_directive(1), "maze_markov=info");
        assert_eq!(default_directive(2), "maze_markov=debug");
        assert_eq!(default_directive(3), "maze_markov=trace");
        assert_eq!(default_directive(u8::MAX), "maze_markov=trace");
    }

    // Tests that a second installation is refused instead of panicking
    #[test]
    fn test_init_logging_only_installs_once() {
        let _first = init_logging(0);
        assert!(!init_logging(1));
    }
}
