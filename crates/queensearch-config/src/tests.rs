//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        board_size = 8
        strategy = "best_first"
        pruning_level = "minimal"
        solution_mode = "all"
        heuristic = "h2"

        [termination]
        step_count_limit = 5000
        millis_spent_limit = 250
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.board_size, 8);
    assert_eq!(config.strategy, SearchStrategy::BestFirst);
    assert_eq!(config.pruning_level, PruningLevel::Minimal);
    assert_eq!(config.solution_mode, SolutionMode::All);
    assert_eq!(config.heuristic, Some(HeuristicKind::H2));
    assert_eq!(config.step_limit(), Some(5000));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_defaults() {
    let config = SearchConfig::from_toml_str("board_size = 5").unwrap();
    assert_eq!(config, SearchConfig::new(5));
    assert_eq!(config.strategy, SearchStrategy::BreadthFirst);
    assert_eq!(config.pruning_level, PruningLevel::Full);
    assert_eq!(config.solution_mode, SolutionMode::All);
    assert!(config.heuristic.is_none());
    assert!(config.time_limit().is_none());
}

#[test]
fn test_strategy_aliases() {
    let config = SearchConfig::from_toml_str("board_size = 4\nstrategy = \"dfs\"").unwrap();
    assert_eq!(config.strategy, SearchStrategy::DepthFirst);
}

#[test]
fn test_missing_board_size_is_rejected() {
    let err = SearchConfig::from_toml_str("strategy = \"bfs\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        board_size: 6
        strategy: depth_first
        pruning_level: none
        solution_mode: first
        termination:
          seconds_spent_limit: 2
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.board_size, 6);
    assert_eq!(config.strategy, SearchStrategy::DepthFirst);
    assert_eq!(config.pruning_level, PruningLevel::None);
    assert_eq!(config.solution_mode, SolutionMode::First);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(2)));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new(7)
        .with_strategy(SearchStrategy::DepthFirst)
        .with_pruning_level(PruningLevel::Partial)
        .with_solution_mode(SolutionMode::First)
        .with_step_limit(100)
        .with_time_limit(Duration::from_millis(1500));

    assert_eq!(config.board_size, 7);
    assert_eq!(config.step_limit(), Some(100));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(1500)));
}

#[test]
fn test_validate_rejects_zero_board() {
    let err = SearchConfig::new(0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_validate_rejects_best_first_without_heuristic() {
    let config = SearchConfig::new(4).with_strategy(SearchStrategy::BestFirst);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = config.with_heuristic(HeuristicKind::H1);
    assert!(config.validate().is_ok());
}

#[test]
fn test_termination_config() {
    let unbounded = TerminationConfig::default();
    assert!(unbounded.is_unbounded());
    assert!(unbounded.time_limit().is_none());

    let combined = TerminationConfig {
        seconds_spent_limit: Some(1),
        millis_spent_limit: Some(500),
        ..Default::default()
    };
    assert_eq!(combined.time_limit(), Some(Duration::from_millis(1500)));
    assert!(!combined.is_unbounded());
}

#[test]
fn test_sub_millisecond_time_limit_is_kept() {
    let config = SearchConfig::new(4).with_time_limit(Duration::from_micros(500));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(1)));

    let config = SearchConfig::new(4).with_time_limit(Duration::from_micros(1500));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2)));
}

#[test]
fn test_zero_time_limit_is_a_limit() {
    let config = SearchConfig::new(4).with_time_limit(Duration::ZERO);
    assert_eq!(config.time_limit(), Some(Duration::ZERO));

    let explicit = TerminationConfig {
        millis_spent_limit: Some(0),
        ..Default::default()
    };
    assert_eq!(explicit.time_limit(), Some(Duration::ZERO));
    assert!(!explicit.is_unbounded());
}

#[test]
fn test_huge_seconds_limit_does_not_overflow() {
    let config = SearchConfig::from_toml_str(
        r#"
        board_size = 4

        [termination]
        seconds_spent_limit = 18446744073709552
        millis_spent_limit = 9223372036854775807
        "#,
    )
    .unwrap();

    let limit = config.time_limit().unwrap();
    assert!(limit > Duration::from_secs(18_446_744_073_709_552));

    let extreme = TerminationConfig {
        seconds_spent_limit: Some(u64::MAX),
        millis_spent_limit: Some(u64::MAX),
        ..Default::default()
    };
    assert_eq!(extreme.time_limit(), Some(Duration::MAX));
}

#[test]
fn test_load_dispatches_on_extension() {
    let dir = std::env::temp_dir().join(format!("queensearch-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let yaml_path = dir.join("search.yaml");
    std::fs::write(&yaml_path, "board_size: 6\nstrategy: dfs\n").unwrap();
    let toml_path = dir.join("search.toml");
    std::fs::write(&toml_path, "board_size = 7\n").unwrap();

    let yaml = SearchConfig::load(&yaml_path).unwrap();
    assert_eq!(yaml.board_size, 6);
    assert_eq!(yaml.strategy, SearchStrategy::DepthFirst);

    let toml = SearchConfig::load(&toml_path).unwrap();
    assert_eq!(toml.board_size, 7);

    std::fs::remove_dir_all(&dir).unwrap();
}
