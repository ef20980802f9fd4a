//! Node storage for the prefix tree.
//!
//! Edges are labeled with UTF-16 code units, so a character outside the Basic
//! Multilingual Plane spans two nodes: its high surrogate and, below that, its
//! low surrogate.
//!
//! Every `Node` lives by value inside a `NodeArena` owned by the tree. Nodes
//! refer to each other through `NodeId` indices: the `children` list is the
//! owning edge set, while `parent` is a plain back-reference used for word
//! reconstruction and removal. Slots of detached subtrees go on a free list
//! and are handed out again by later insertions.

use std::ops::{Index, IndexMut};

/// Index of a node inside a tree's arena.
///
/// A `NodeId` is only meaningful for the tree that produced it, and only
/// until that node is detached by a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root always occupies the first slot.
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// Returns the raw arena slot of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single node of the prefix tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    /// Label of the edge from the parent. `None` only for the root.
    pub key: Option<u16>,

    /// Whether the prefix ending at this node is an indexed word
    pub is_terminal: bool,

    /// Child edges in first-inserted-first order
    pub children: Vec<(u16, NodeId)>,

    /// Back-reference to the tree parent. `None` only for the root.
    pub parent: Option<NodeId>,
}

impl Node {
    /// Creates the keyless, non-terminal root node.
    pub fn root() -> Self {
        Node {
            key: None,
            is_terminal: false,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Creates a fresh, non-terminal node hanging off `parent`.
    pub fn new(key: u16, parent: NodeId) -> Self {
        Node {
            key: Some(key),
            is_terminal: false,
            children: Vec::new(),
            parent: Some(parent),
        }
    }

    /// Looks up the child reached through the edge labeled `key`.
    pub fn child(&self, key: u16) -> Option<NodeId> {
        self.children
            .iter()
            .find(|&&(edge, _)| edge == key)
            .map(|&(_, id)| id)
    }

    /// Returns whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Slot storage for all nodes of one tree.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    slots: Vec<Node>,
    free: Vec<NodeId>,
}

impl NodeArena {
    /// Creates an arena holding only the root.
    pub fn new() -> Self {
        NodeArena {
            slots: vec![Node::root()],
            free: Vec::new(),
        }
    }

    /// Number of nodes currently reachable from the root, root included.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Creates a child of `parent` labeled `key` and links it in as the
    /// parent's last child.
    pub fn attach(&mut self, parent: NodeId, key: u16) -> NodeId {
        let node = Node::new(key, parent);
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = node;
                id
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        };
        self[parent].children.push((key, id));
        id
    }

    /// Unlinks every child of `parent` and releases their subtrees.
    ///
    /// Returns the number of terminal nodes that were released.
    pub fn detach_children(&mut self, parent: NodeId) -> usize {
        let children = std::mem::take(&mut self[parent].children);
        children
            .into_iter()
            .map(|(_, child)| self.release(child))
            .sum()
    }

    /// Unlinks `id` from its parent and releases its subtree.
    ///
    /// Returns the number of terminal nodes that were released.
    pub fn detach(&mut self, id: NodeId) -> usize {
        if let Some(parent) = self[id].parent {
            self[parent].children.retain(|&(_, child)| child != id);
        }
        self.release(id)
    }

    /// Returns a subtree's slots to the free list. The caller must already
    /// have unlinked `id` from its parent.
    fn release(&mut self, id: NodeId) -> usize {
        let mut released_terminals = 0;
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let node = &mut self.slots[current.0];
            if node.is_terminal {
                released_terminals += 1;
            }
            stack.extend(node.children.drain(..).map(|(_, child)| child));
            node.is_terminal = false;
            node.parent = None;
            self.free.push(current);
        }

        released_terminals
    }

    /// Returns the node at `id` if that slot currently holds a reachable node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.0)
            .filter(|node| id == NodeId::ROOT || node.parent.is_some())
    }

    /// Collects the code units on the path to a node by walking parent links
    /// to the root, returned in root-to-node order.
    pub fn units_of(&self, id: NodeId) -> Vec<u16> {
        let mut units = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = &self[node_id];
            units.extend(node.key);
            current = node.parent;
        }

        units.reverse();
        units
    }

    /// Rebuilds the word a terminal node represents.
    ///
    /// Terminal nodes always close a whole string, so their path decodes
    /// without loss. A path stopping between two surrogates decodes its dangling
    /// half as U+FFFD.
    pub fn word_of(&self, id: NodeId) -> String {
        String::from_utf16_lossy(&self.units_of(id))
    }

    /// Drops every node except a fresh root.
    pub fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots[0] = Node::root();
        self.free.clear();
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.slots[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.0]
    }
}
