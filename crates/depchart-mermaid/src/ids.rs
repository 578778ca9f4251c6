//! Stable node identifiers for one render pass.

use std::fmt;

use indexmap::IndexMap;

/// Synthetic Mermaid node identifier (`Node0`, `Node1`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node{}", self.0)
    }
}

/// Insertion-ordered map from source name to node identifier.
///
/// The first lookup of a name assigns the next free index, so ids are dense
/// and follow first-seen order. A map lives for exactly one render call.
#[derive(Debug, Default)]
pub struct NodeIds {
    ids: IndexMap<String, NodeId>,
}

impl NodeIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert(&mut self, source_name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(source_name) {
            return id;
        }
        let id = NodeId(self.ids.len());
        self.ids.insert(source_name.to_owned(), id);
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_wins() {
        let mut ids = NodeIds::new();
        let a = ids.get_or_insert("A.sol");
        let b = ids.get_or_insert("B.sol");
        assert_eq!(ids.get_or_insert("A.sol"), a);
        assert_eq!(a.to_string(), "Node0");
        assert_eq!(b.to_string(), "Node1");
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_ids_are_dense_in_first_seen_order() {
        let mut ids = NodeIds::new();
        let assigned: Vec<usize> = ["z.sol", "a.sol", "z.sol", "m.sol", "a.sol"]
            .into_iter()
            .map(|name| ids.get_or_insert(name).index())
            .collect();
        assert_eq!(assigned, vec![0, 1, 0, 2, 1]);
        assert_eq!(ids.len(), 3);
    }
}
