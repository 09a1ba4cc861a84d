mod building;
mod node;
mod trail;
mod wont_visit;

pub use building::BuildingTree;
pub use node::TrailNode;
pub use trail::TrailTree;
pub use wont_visit::WontVisitTree;

/// A node either carries exactly two children or is a leaf standing for one
/// city; single-child nodes never occur. The variant replaces the downcast
/// the leaf accessors would otherwise need.
#[derive(Clone, Copy, Debug)]
pub enum Kind {
    Internal { children: [usize; 2] },
    Leaf { city: usize },
}

impl Kind {
    pub fn city(&self) -> Option<usize> {
        match self {
            Kind::Leaf { city } => Some(*city),
            Kind::Internal { .. } => None,
        }
    }
}

/// Shared skeleton of the three tree kinds: an index arena owning the nodes
/// and a city-indexed leaf table. Parent and child links are arena indices;
/// the back-reference never owns anything.
#[derive(Clone, Debug)]
pub struct Tree<N> {
    arena: Vec<N>,
    root: usize,
    leaves: Vec<Option<usize>>,
}

impl<N> Tree<N> {
    pub fn new(num_city: usize) -> Self {
        let arena = Vec::with_capacity(2 * num_city);
        let leaves = vec![None; num_city];
        Tree { arena, root: 0, leaves }
    }
    pub fn push(&mut self, node: N) -> usize {
        self.arena.push(node);
        self.arena.len() - 1
    }
    pub fn node(&self, id: usize) -> &N {
        &self.arena[id]
    }
    pub fn node_mut(&mut self, id: usize) -> &mut N {
        &mut self.arena[id]
    }
    pub fn root(&self) -> usize {
        self.root
    }
    pub fn set_root(&mut self, id: usize) {
        self.root = id;
    }
    pub fn num_city(&self) -> usize {
        self.leaves.len()
    }
    pub fn leaf(&self, city: usize) -> Option<usize> {
        self.leaves[city]
    }
    pub fn set_leaf(&mut self, city: usize, id: usize) {
        debug_assert!(self.leaves[city].is_none());
        self.leaves[city] = Some(id);
    }
}
