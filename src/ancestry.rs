//! Auxiliary ancestry graph — merges the possibly redundant inheritance
//! description embedded in a unit into a single linear chain per type.
//!
//! The graph is advisory and display-only: it augments, but never overrides,
//! the base-class reference resolved from the declared base list (the ancestry
//! description may be absent, partial, or ambiguous for multiply-rooted
//! hierarchies).

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::model::ModelError;

/// One entry in a unit's ancestry description. Ids are small integers scoped
/// to the owning unit, not globally unique.
#[derive(Debug, Clone)]
pub struct AncestryNode {
    pub id: u32,
    /// Display name: last dot-segment of the node's label.
    pub name: String,
    /// Immediate ancestor by id; `None` for the root.
    pub ancestor: Option<u32>,
}

#[derive(Debug, Default)]
pub struct AncestryGraph {
    nodes: HashMap<u32, AncestryNode>,
}

impl AncestryGraph {
    /// Insert a node declaration. Repeated declarations of the same id merge
    /// by keeping the first known ancestor: a later duplicate never downgrades
    /// a known ancestor to absent.
    pub fn insert(&mut self, node: AncestryNode) {
        match self.nodes.entry(node.id) {
            Entry::Occupied(mut e) => {
                if e.get().ancestor.is_none() {
                    e.get_mut().ancestor = node.ancestor;
                }
            }
            Entry::Vacant(e) => {
                e.insert(node);
            }
        }
    }

    /// Look up a node by display name.
    pub fn node_named(&self, name: &str) -> Option<&AncestryNode> {
        self.nodes.values().find(|n| n.name == name)
    }

    /// Walk ancestor links from `id` up to the root, returning nodes ordered
    /// from the most distant ancestor down to the starting node.
    ///
    /// The source format promises acyclicity but nothing enforces it, so a
    /// visited set turns a cycle into an error instead of an endless walk.
    /// A dangling ancestor id ends the chain with a diagnostic.
    pub fn chain_to(&self, id: u32) -> Result<Vec<&AncestryNode>, ModelError> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.nodes.get(&id);
        while let Some(node) = current {
            if !seen.insert(node.id) {
                return Err(ModelError::AncestryCycle(node.id));
            }
            chain.push(node);
            current = match node.ancestor {
                Some(up) => {
                    let next = self.nodes.get(&up);
                    if next.is_none() {
                        eprintln!("ancestry node not found: {up}");
                    }
                    next
                }
                None => None,
            };
        }
        chain.reverse();
        Ok(chain)
    }

    /// The chain of ancestors strictly above the type with the given simple
    /// name. Empty when the graph has no such node or the node is a root —
    /// the type itself is appended by the caller, not duplicated here.
    pub fn ancestors_of(&self, simple_name: &str) -> Result<Vec<&AncestryNode>, ModelError> {
        match self.node_named(simple_name).and_then(|n| n.ancestor) {
            Some(up) => self.chain_to(up),
            None => Ok(Vec::new()),
        }
    }
}
