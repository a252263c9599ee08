use test_fixtures::{make_claim, MockStore};
use verity_core::claim::{MediaKind, Platform};
use verity_core::errors::VerityError;
use verity_core::models::Relationship;
use verity_graph::GraphTracer;

fn two_claim_store(kind_a: MediaKind, platform_a: Platform, kind_b: MediaKind, platform_b: Platform) -> MockStore {
    let mut store = MockStore::new();
    store.insert(make_claim("a", kind_a, platform_a, 10));
    store.insert(make_claim("b", kind_b, platform_b, 5));
    store.link_both("a", "b", 0.92);
    store
}

// ── Error handling ───────────────────────────────────────────────────────

#[test]
fn unknown_root_fails_fast_without_partial_graph() {
    let store = MockStore::new();
    let tracer = GraphTracer::new(&store);

    let err = tracer.trace_evolution("missing", 3).unwrap_err();
    assert!(matches!(err, VerityError::UnknownClaim { .. }));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn store_failure_propagates_unchanged() {
    let store = MockStore::failing();
    let tracer = GraphTracer::new(&store);

    let err = tracer.trace_evolution("a", 3).unwrap_err();
    assert!(matches!(err, VerityError::ExternalDependency { .. }));
}

// ── Bounds ───────────────────────────────────────────────────────────────

#[test]
fn zero_hops_yields_root_only_graph() {
    let store = two_claim_store(
        MediaKind::Text,
        Platform::Twitter,
        MediaKind::Text,
        Platform::Twitter,
    );
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("a", 0).unwrap();
    assert_eq!(graph.root, "a");
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].id, "a");
    assert_eq!(graph.nodes[0].hops, 0);
    assert!(graph.edges.is_empty());
}

#[test]
fn hop_limit_stops_expansion() {
    // Chain a -> b -> c -> d; max_hops 2 records up to hop 2 but never
    // expands nodes at the limit, so d is unreachable.
    let mut store = MockStore::new();
    for id in ["a", "b", "c", "d"] {
        store.insert(make_claim(id, MediaKind::Text, Platform::Twitter, 1));
    }
    store.link("a", "b", 0.9);
    store.link("b", "c", 0.9);
    store.link("c", "d", 0.9);
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("a", 2).unwrap();
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(graph.nodes.iter().all(|n| n.hops <= 2));
    // Expanded nodes are all strictly under the hop limit.
    let expanded: Vec<&str> = graph.edges.iter().map(|e| e.from.as_str()).collect();
    assert!(expanded.iter().all(|id| {
        graph.nodes.iter().find(|n| n.id == **id).unwrap().hops < 2
    }));
}

#[test]
fn node_cap_truncates_large_graphs() {
    // A hub with a long chain of neighbors each pointing onward; well over
    // 50 reachable claims.
    let mut store = MockStore::new();
    for i in 0..80 {
        store.insert(make_claim(&format!("c{i}"), MediaKind::Text, Platform::Other, 1));
    }
    for i in 0..79 {
        store.link(&format!("c{i}"), &format!("c{}", i + 1), 0.9);
    }
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("c0", 100).unwrap();
    assert_eq!(graph.nodes.len(), 50);
}

#[test]
fn cyclic_relations_terminate() {
    let mut store = MockStore::new();
    for id in ["a", "b", "c"] {
        store.insert(make_claim(id, MediaKind::Text, Platform::Twitter, 1));
    }
    store.link("a", "b", 0.9);
    store.link("b", "c", 0.9);
    store.link("c", "a", 0.9);
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("a", 10).unwrap();
    assert_eq!(graph.nodes.len(), 3);
    // The cycle-closing edge back to the root still gets recorded.
    assert!(graph.edges.iter().any(|e| e.from == "c" && e.to == "a"));
}

#[test]
fn at_most_five_neighbors_per_expansion() {
    let mut store = MockStore::new();
    store.insert(make_claim("hub", MediaKind::Text, Platform::Twitter, 1));
    for i in 0..8 {
        let id = format!("n{i}");
        store.insert(make_claim(&id, MediaKind::Text, Platform::Twitter, 1));
        store.link("hub", &id, 0.9);
    }
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("hub", 1).unwrap();
    let from_hub = graph.edges.iter().filter(|e| e.from == "hub").count();
    assert_eq!(from_hub, 5);
}

// ── Relationship classification ──────────────────────────────────────────

#[test]
fn same_kind_same_platform_is_duplicate() {
    let store = two_claim_store(
        MediaKind::Text,
        Platform::Twitter,
        MediaKind::Text,
        Platform::Twitter,
    );
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("a", 1).unwrap();
    let edge = graph.edges.iter().find(|e| e.from == "a").unwrap();
    assert_eq!(edge.relationship, Relationship::DuplicateSamePlatform);
    assert_eq!(edge.relationship.to_string(), "duplicate_same_platform");
    assert!((edge.similarity - 0.92).abs() < 1e-9);
}

#[test]
fn same_kind_different_platform_is_cross_platform() {
    let store = two_claim_store(
        MediaKind::Text,
        Platform::Twitter,
        MediaKind::Text,
        Platform::Facebook,
    );
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("a", 1).unwrap();
    let edge = graph.edges.iter().find(|e| e.from == "a").unwrap();
    assert_eq!(edge.relationship, Relationship::CrossPlatformDuplicate);
}

#[test]
fn kind_change_is_media_transformation() {
    let store = two_claim_store(
        MediaKind::Image,
        Platform::Instagram,
        MediaKind::Text,
        Platform::Twitter,
    );
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("a", 2).unwrap();
    let edge = graph.edges.iter().find(|e| e.from == "a").unwrap();
    assert_eq!(
        edge.relationship,
        Relationship::MediaTransformation {
            from: MediaKind::Image,
            to: MediaKind::Text,
        }
    );
    assert_eq!(
        edge.relationship.to_string(),
        "media_transformation_image_to_text"
    );
    // The reverse edge classifies in the reverse direction.
    let back = graph.edges.iter().find(|e| e.from == "b").unwrap();
    assert_eq!(
        back.relationship.to_string(),
        "media_transformation_text_to_image"
    );
}

#[test]
fn hop_distances_are_bfs_levels() {
    let mut store = MockStore::new();
    store.insert(make_claim("root", MediaKind::Text, Platform::Twitter, 1));
    store.insert(make_claim("near", MediaKind::Text, Platform::Twitter, 1));
    store.insert(make_claim("far", MediaKind::Text, Platform::Twitter, 1));
    store.link("root", "near", 0.9);
    store.link("near", "far", 0.9);
    let tracer = GraphTracer::new(&store);

    let graph = tracer.trace_evolution("root", 3).unwrap();
    let hops = |id: &str| graph.nodes.iter().find(|n| n.id == id).unwrap().hops;
    assert_eq!(hops("root"), 0);
    assert_eq!(hops("near"), 1);
    assert_eq!(hops("far"), 2);
}
