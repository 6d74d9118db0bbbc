use std::iter::from_fn;

/// A stable handle addressing a node within its [`Tree`]
///
/// Handles are never invalidated: the arena only grows, and nodes are never moved or removed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    fn get(self) -> usize {
        self.0 as usize
    }
}

/// A single node of a [`Tree`]: a value, an ordered list of children, and a navigational link back
/// to its parent
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Node<T> {
    value: T,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeIndex>) -> Self {
        Self {
            value,
            parent,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// The node's children, in insertion order
    #[inline]
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

/// A multi-way tree backed by a node arena
///
/// Each node is owned by the arena and addressed by [`NodeIndex`]; the child lists define the tree
/// shape, while parent links are purely navigational. Children can only be created in place under
/// an existing parent, so every node except the root has exactly one parent, and the tree is
/// acyclic by construction.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Tree<T> {
    pub fn new(root_value: T) -> Self {
        Self {
            nodes: vec![Node::new(root_value, None)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeIndex {
        NodeIndex(0_u32)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> &Node<T> {
        &self.nodes[index.get()]
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        &mut self.nodes[index.get()]
    }

    pub fn parent_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get(index).parent
    }

    /// Allocates a new node holding `value` and appends it to `parent`'s child list
    pub fn add_child(&mut self, parent: NodeIndex, value: T) -> NodeIndex {
        let child: NodeIndex = NodeIndex(self.nodes.len() as u32);

        self.nodes.push(Node::new(value, Some(parent)));
        self.nodes[parent.get()].children.push(child);

        child
    }

    /// Lazily yields `start` followed by the descendants of each of its children, in child-list
    /// order (pre-order traversal)
    pub fn iter_depth_first(&self, start: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut pending: Vec<NodeIndex> = vec![start];

        from_fn(move || {
            let index: NodeIndex = pending.pop()?;

            pending.extend(self.get(index).children.iter().rev().copied());

            Some(index)
        })
    }
}
