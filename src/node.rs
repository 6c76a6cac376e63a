/*!
# Node Representation

Nodes are identified by strings at the public boundary and by a compact handle internally.

- A **node id** is any value implementing [`NodeId`]. It is normalized to exactly one canonical
  string on entry, so `1`, `"1"` and `String::from("1")` all address the same node.
- A **node handle** ([`Node`]) is a `u32` assigned by the graph when the node is created. Handles
  are dense enough to size per-node state vectors by [`GraphNodeOrder::node_bound`](crate::ops::GraphNodeOrder::node_bound),
  and are recycled once a node is removed.
*/

use std::{borrow::Cow, sync::Arc};
use stream_bitset::bitset::BitSetImpl;

/// Handle of a live node inside a graph
pub type Node = u32;

/// Node-Value that is considered invalid. Also used as the root of the compound hierarchy.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes; sized by [`GraphNodeOrder::node_bound`](crate::ops::GraphNodeOrder::node_bound)
pub type NodeBitSet = BitSetImpl<Node>;

/// Canonical, shared form of a node id (also used for edge names)
pub type NodeName = Arc<str>;

/// Values that can be used as node ids or edge names.
///
/// Implementations must produce the same string for values that should denote the same node;
/// numbers use their decimal `Display` form.
pub trait NodeId {
    /// Returns the canonical string form of this id
    fn node_id(&self) -> Cow<'_, str>;
}

impl NodeId for str {
    fn node_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl NodeId for String {
    fn node_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl NodeId for Arc<str> {
    fn node_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl NodeId for Cow<'_, str> {
    fn node_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T> NodeId for &T
where
    T: NodeId + ?Sized,
{
    fn node_id(&self) -> Cow<'_, str> {
        (**self).node_id()
    }
}

macro_rules! impl_node_id_display {
    ($($t:ty),*) => {
        $(
            impl NodeId for $t {
                fn node_id(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_node_id_display!(char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
