use verity_core::config::VerityConfig;
use verity_core::constants;

#[test]
fn defaults_match_algorithm_constants() {
    let config = VerityConfig::default();
    assert_eq!(config.trust.high_threshold, 0.70);
    assert_eq!(config.trust.medium_threshold, 0.40);
    assert_eq!(config.trust.evidence_decay_factor, 0.95);
    assert_eq!(config.trust.temporal_decay_rate, 0.01);
    assert_eq!(config.trust.momentum, 0.3);
    assert_eq!(config.search.candidate_multiplier, 2);
    assert_eq!(config.search.default_limit, 10);
    assert_eq!(config.graph.default_max_hops, 3);
    assert_eq!(config.graph.node_cap, constants::MAX_GRAPH_NODES);
    assert_eq!(
        config.graph.neighbor_limit,
        constants::MAX_NEIGHBORS_PER_EXPANSION
    );
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let config = VerityConfig::from_toml(
        r#"
[trust]
high_threshold = 0.75

[graph]
default_max_hops = 2
"#,
    )
    .unwrap();

    assert_eq!(config.trust.high_threshold, 0.75);
    // Untouched fields keep their defaults.
    assert_eq!(config.trust.medium_threshold, 0.40);
    assert_eq!(config.graph.default_max_hops, 2);
    assert_eq!(config.search.default_limit, 10);
}

#[test]
fn empty_toml_is_all_defaults() {
    let config = VerityConfig::from_toml("").unwrap();
    assert_eq!(config.trust.high_threshold, 0.70);
}

#[test]
fn malformed_toml_is_invalid_input() {
    let err = VerityConfig::from_toml("trust = nonsense").unwrap_err();
    assert!(err.to_string().contains("invalid input"));
}

#[test]
fn graph_limits_never_exceed_hard_caps() {
    let config = VerityConfig::from_toml(
        r#"
[graph]
neighbor_limit = 500
node_cap = 500
"#,
    )
    .unwrap();

    assert_eq!(
        config.graph.effective_neighbor_limit(),
        constants::MAX_NEIGHBORS_PER_EXPANSION
    );
    assert_eq!(config.graph.effective_node_cap(), constants::MAX_GRAPH_NODES);
}
