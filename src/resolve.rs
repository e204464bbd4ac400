//! Cross-reference resolution over the complete compound set.
//!
//! References are by name and a referenced compound may be built after the
//! referencing one, so nothing here runs until the whole set exists: build
//! first, then resolve. Resolution is a pure function of (set, name) — no
//! caching, no mutation — and may be recomputed freely.

use std::collections::HashMap;

use crate::model::{Compound, Kind};

/// The full set of built compounds, indexed by id and by fully-qualified name.
///
/// Insertion order is preserved so output is deterministic for a given input
/// order. Immutable once the build pass is over; the resolvers only read.
#[derive(Debug, Default)]
pub struct CompoundSet {
    compounds: Vec<Compound>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl CompoundSet {
    /// Insert a built compound. A repeated id replaces the earlier record in
    /// place, keeping both indices consistent.
    pub fn insert(&mut self, compound: Compound) {
        if let Some(&slot) = self.by_id.get(&compound.id) {
            self.by_name.remove(&self.compounds[slot].full_name);
            self.by_name.insert(compound.full_name.clone(), slot);
            self.compounds[slot] = compound;
        } else {
            let slot = self.compounds.len();
            self.by_id.insert(compound.id.clone(), slot);
            self.by_name.insert(compound.full_name.clone(), slot);
            self.compounds.push(compound);
        }
    }

    /// All Class-kind compounds in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &Compound> {
        self.compounds.iter().filter(|c| c.kind == Kind::Class)
    }

    /// Exact lookup by fully-qualified name. A miss is expected and
    /// recoverable (documentation sets routinely reference types outside the
    /// documented scope); it is reported once per lookup and yields `None`.
    pub fn find_by_name(&self, name: &str) -> Option<&Compound> {
        let found = self.by_name.get(name).map(|&slot| &self.compounds[slot]);
        if found.is_none() {
            eprintln!("compound not found: {name}");
        }
        found
    }

    /// First base reference that resolves to a Class-kind compound.
    pub fn resolve_base_class(&self, c: &Compound) -> Option<&Compound> {
        c.base_refs
            .iter()
            .filter_map(|name| self.find_by_name(name))
            .find(|b| b.kind == Kind::Class)
    }

    /// Every base reference that resolves to an Interface-kind compound,
    /// in source order.
    pub fn resolve_interfaces(&self, c: &Compound) -> Vec<&Compound> {
        c.base_refs
            .iter()
            .filter_map(|name| self.find_by_name(name))
            .filter(|b| b.kind == Kind::Interface)
            .collect()
    }

    /// Resolved derived-type references; entries that fail to resolve are
    /// dropped.
    pub fn resolve_derived(&self, c: &Compound) -> Vec<&Compound> {
        c.derived_refs
            .iter()
            .filter_map(|name| self.find_by_name(name))
            .collect()
    }

    /// Class compounds grouped by namespace for the index view, preserving
    /// first-seen namespace order.
    pub fn classes_by_namespace(&self) -> Vec<(&str, Vec<&Compound>)> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<&Compound>> = HashMap::new();
        for c in self.classes() {
            let ns = c.namespace();
            if !groups.contains_key(ns) {
                order.push(ns);
            }
            groups.entry(ns).or_default().push(c);
        }
        order
            .into_iter()
            .filter_map(|ns| groups.remove(ns).map(|classes| (ns, classes)))
            .collect()
    }
}
