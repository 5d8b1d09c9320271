//! In-memory ontology backed by a child→parent petgraph DAG.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, HashMap, VecDeque};

use pheno_core::traits::{OntologyLookup, ResolvedTerm};

#[derive(Debug, Clone)]
struct TermNode {
    id: String,
    name: Option<String>,
}

/// An `OntologyLookup` built from (id, name, parents) records.
///
/// Edges point child→parent; `resolve` walks them with BFS to produce
/// the minimum hop count to every ancestor. Immutable after
/// construction, so concurrent reads are safe.
#[derive(Debug, Default)]
pub struct MemoryOntology {
    graph: DiGraph<TermNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl MemoryOntology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term with its parent ids. Parents that have not been
    /// inserted yet get placeholder nodes, so insertion order does not
    /// matter.
    pub fn insert(&mut self, id: &str, name: Option<&str>, parents: &[&str]) {
        let node = self.node_for(id);
        if let Some(name) = name {
            self.graph[node].name = Some(name.to_string());
        }
        for parent in parents {
            let parent_node = self.node_for(parent);
            if !self.graph.contains_edge(node, parent_node) {
                self.graph.add_edge(node, parent_node, ());
            }
        }
    }

    fn node_for(&mut self, id: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(id) {
            return node;
        }
        let node = self.graph.add_node(TermNode {
            id: id.to_string(),
            name: None,
        });
        self.index.insert(id.to_string(), node);
        node
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl OntologyLookup for MemoryOntology {
    fn resolve(&self, id: &str) -> Option<ResolvedTerm> {
        let start = *self.index.get(id)?;

        // BFS over child→parent edges; first visit is the shortest path
        // since all edges have unit weight.
        let mut ancestors = BTreeMap::new();
        let mut queue = VecDeque::new();
        ancestors.insert(self.graph[start].id.clone(), 0u32);
        queue.push_back((start, 0u32));
        while let Some((node, depth)) = queue.pop_front() {
            for parent in self.graph.neighbors(node) {
                let entry = &self.graph[parent];
                if !ancestors.contains_key(&entry.id) {
                    ancestors.insert(entry.id.clone(), depth + 1);
                    queue.push_back((parent, depth + 1));
                }
            }
        }

        let node = &self.graph[start];
        Some(ResolvedTerm {
            id: node.id.clone(),
            name: node.name.clone(),
            ancestors,
        })
    }
}
