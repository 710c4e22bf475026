//! Shared strategies and helpers for graph property tests

#![allow(dead_code)]

use multigraph::Graph;
use proptest::prelude::*;
use std::collections::BTreeSet;

pub type Triple = (u8, u8, u8);

/// Small value ranges so that collisions, parallel edges and self-loops
/// show up often.
pub fn arb_triple() -> impl Strategy<Value = Triple> {
    (0u8..6, 0u8..6, 0u8..4)
}

pub fn arb_triples() -> impl Strategy<Value = Vec<Triple>> {
    prop::collection::vec(arb_triple(), 0..40)
}

/// Graph over nodes 0..6 plus the endpoints of the given edges
pub fn build(triples: &[Triple]) -> Graph<u8, u8> {
    let mut g = Graph::from_nodes(0u8..6);
    for (s, d, w) in triples {
        g.insert_edge(s, d, *w).expect("endpoints are always present");
    }
    g
}

pub fn edges(g: &Graph<u8, u8>) -> Vec<Triple> {
    g.iter().map(|(s, d, w)| (*s, *d, *w)).collect()
}

pub fn edge_set(triples: &[Triple]) -> BTreeSet<Triple> {
    triples.iter().copied().collect()
}

/// Walk the graph with cursors from `begin` to `end`
pub fn walk_forward(g: &Graph<u8, u8>) -> Vec<Triple> {
    let mut out = Vec::new();
    let mut c = g.begin();
    while c != g.end() {
        let (s, d, w) = g.get(&c).expect("cursor between begin and end");
        out.push((*s, *d, *w));
        c = g.advance(&c);
    }
    out
}

/// Walk the graph with cursors from `rbegin` to `rend`
pub fn walk_backward(g: &Graph<u8, u8>) -> Vec<Triple> {
    let mut out = Vec::new();
    let mut c = g.rbegin();
    while c != g.rend() {
        let (s, d, w) = g.get(&c).expect("cursor between rbegin and rend");
        out.push((*s, *d, *w));
        c = g.retreat(&c);
    }
    out
}
