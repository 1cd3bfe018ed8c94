//! Property-based tests for the serializer.
//!
//! Checked over random graphs, cyclic ones included:
//! - Determinism: equal inputs produce identical bytes
//! - Completeness: every reachable entity is written to the context once
//! - Stability: copying a graph and serializing again reproduces the text
//! - Structure: every reference in the copy still names the same target

mod common;

use common::Node;
use gemd_json::{GemdJson, Obj, Reference, Value};
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

/// A graph over `n` nodes: an optional `next` edge and some peer edges each.
#[derive(Debug, Clone)]
struct GraphShape {
    next: Vec<Option<usize>>,
    peers: Vec<Vec<usize>>,
}

fn graph_strategy() -> impl Strategy<Value = GraphShape> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::option::of(0..n), n),
            prop::collection::vec(prop::collection::vec(0..n, 0..3), n),
        )
            .prop_map(|(next, peers)| GraphShape { next, peers })
    })
}

fn build(graph: &GraphShape) -> Vec<Obj> {
    let nodes: Vec<Obj> = (0..graph.next.len())
        .map(|i| Node::obj(&format!("n{i}")))
        .collect();
    for (i, node) in nodes.iter().enumerate() {
        let mut node = node.downcast_mut::<Node>().unwrap();
        node.next = graph.next[i].map(|j| Reference::from(&nodes[j]));
        node.peers = graph.peers[i].iter().map(|&j| Reference::from(&nodes[j])).collect();
    }
    nodes
}

fn auto_uid(obj: &Obj) -> Option<String> {
    obj.uids()?.get("auto").map(str::to_string)
}

fn target_uid(reference: &Reference) -> Option<String> {
    match reference {
        Reference::Entity(obj) => auto_uid(obj),
        Reference::Link(link) => Some(link.id.clone()),
    }
}

fn plain_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        // quarter steps stay exact through decimal text
        (-4_000_000i32..4_000_000).prop_map(|q| Value::Float(f64::from(q) / 4.0)),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            // "type" is reserved for tagged records
            prop::collection::btree_map("[a-s]{1,6}", inner, 0..4)
                .prop_map(|m: BTreeMap<String, Value>| Value::Map(m)),
        ]
    })
}

// =============================================================================
// GRAPH PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn dumps_is_deterministic(graph in graph_strategy()) {
        let json = common::json_with_nodes();
        let nodes = build(&graph);
        let root = Value::list(&nodes);
        prop_assert_eq!(json.dumps(&root).unwrap(), json.dumps(&root).unwrap());
    }

    #[test]
    fn context_holds_each_node_once(graph in graph_strategy()) {
        let json = common::json_with_nodes();
        let nodes = build(&graph);
        let doc = common::parse(&json.dumps(&Value::list(&nodes)).unwrap());
        let context = doc["context"].as_array().unwrap();

        prop_assert_eq!(context.len(), nodes.len());
        let mut ids: Vec<&str> = context
            .iter()
            .map(|e| e["uids"]["auto"].as_str().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), nodes.len());
    }

    #[test]
    fn copy_reserializes_identically(graph in graph_strategy()) {
        let json = common::json_with_nodes();
        let nodes = build(&graph);
        let first = json.dumps(&Value::list(&nodes)).unwrap();
        let second = json.dumps(&json.loads(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn copy_preserves_every_edge(graph in graph_strategy()) {
        let json = common::json_with_nodes();
        let nodes = build(&graph);
        let copy = json.copy(&Value::list(&nodes)).unwrap();
        let copied = copy.as_list().unwrap();
        prop_assert_eq!(copied.len(), nodes.len());

        for (original, copied) in nodes.iter().zip(copied) {
            let original = original.downcast_ref::<Node>().unwrap();
            let copied = common::object(copied).downcast_ref::<Node>().unwrap();
            prop_assert_eq!(&copied.name, &original.name);
            prop_assert_eq!(&copied.uids, &original.uids);
            prop_assert_eq!(
                copied.next.as_ref().and_then(target_uid),
                original.next.as_ref().and_then(target_uid)
            );
            prop_assert_eq!(
                copied.peers.iter().map(target_uid).collect::<Vec<_>>(),
                original.peers.iter().map(target_uid).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn assigned_uids_survive_repeated_dumps(graph in graph_strategy()) {
        let json = common::json_with_nodes();
        let nodes = build(&graph);
        let root = Value::list(&nodes);
        json.dumps(&root).unwrap();
        let first: Vec<_> = nodes.iter().map(auto_uid).collect();
        json.dumps(&root).unwrap();
        let second: Vec<_> = nodes.iter().map(auto_uid).collect();
        prop_assert!(first.iter().all(Option::is_some));
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// PLAIN VALUE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn plain_values_roundtrip(value in plain_value()) {
        let json = GemdJson::new();
        prop_assert_eq!(json.copy(&value).unwrap(), value.clone());
        prop_assert_eq!(json.raw_loads(&json.raw_dumps(&value).unwrap()).unwrap(), value);
    }
}
