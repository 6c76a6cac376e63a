use fxhash::FxHashMap;

use crate::{edge::*, node::*};

/// The four adjacency indices kept per node.
///
/// - `in_edges` / `out_edges`: edge descriptors keyed by their storage key, for fast
///   inclusion and removal,
/// - `predecessors` / `successors`: neighbor handle to the number of parallel edges
///   connecting the two nodes in that direction.
///
/// All four must stay consistent with the edge store of the graph at all times.
#[derive(Debug, Clone, Default)]
pub(crate) struct Adjacency {
    pub in_edges: FxHashMap<EdgeKey, Edge>,
    pub out_edges: FxHashMap<EdgeKey, Edge>,
    pub predecessors: FxHashMap<Node, NumEdges>,
    pub successors: FxHashMap<Node, NumEdges>,
}

/// Increments the occurrence counter of `key`, inserting it with a count of one if absent
pub(crate) fn increment_or_init(map: &mut FxHashMap<Node, NumEdges>, key: Node) {
    *map.entry(key).or_insert(0) += 1;
}

/// Decrements the occurrence counter of `key` and drops the entry once it reaches zero
pub(crate) fn decrement_or_remove(map: &mut FxHashMap<Node, NumEdges>, key: Node) {
    if let Some(count) = map.get_mut(&key) {
        *count -= 1;
        if *count == 0 {
            map.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters() {
        let mut map = FxHashMap::default();
        increment_or_init(&mut map, 3);
        increment_or_init(&mut map, 3);
        increment_or_init(&mut map, 5);
        assert_eq!(map.get(&3), Some(&2));

        decrement_or_remove(&mut map, 3);
        assert_eq!(map.get(&3), Some(&1));
        decrement_or_remove(&mut map, 3);
        assert!(!map.contains_key(&3));

        // absent keys are left alone
        decrement_or_remove(&mut map, 7);
        assert_eq!(map.len(), 1);
    }
}
