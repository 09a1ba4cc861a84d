use super::{BuildingTree, Kind, Tree};
use crate::component::{Cities, Clock};

#[derive(Clone, Debug)]
pub struct WontVisitNode {
    pub parent: Option<usize>,
    pub kind: Kind,
    wont_visit: bool,
    restart_seen: usize,
}

impl WontVisitNode {
    fn new(kind: Kind) -> Self {
        WontVisitNode { parent: None, kind, wont_visit: false, restart_seen: 0 }
    }
}

/// Visited-city mask shaped identically to the trail tree it partners, so
/// the two can be descended in lock-step. Marks are tagged with the current
/// restart epoch; bumping the epoch unmarks everything at once.
#[derive(Clone, Debug)]
pub struct WontVisitTree {
    tree: Tree<WontVisitNode>,
}

impl WontVisitTree {
    /// Top-down: copy the shape of a building tree.
    pub fn top_down(cities: &Cities, building: &BuildingTree) -> Self {
        let mut tree = Tree::new(cities.len());
        let root = copy_shape(&mut tree, building, building.root());
        tree.set_root(root);
        WontVisitTree { tree }
    }
    /// Bottom-up: pair leaves in city order, carrying an odd node forward.
    /// Mirrors `TrailTree::bottom_up` exactly, shape-wise.
    pub fn bottom_up(cities: &Cities) -> Self {
        let mut tree = Tree::new(cities.len());
        let mut level = vec![];
        for city in cities.interior() {
            let id = tree.push(WontVisitNode::new(Kind::Leaf { city }));
            tree.set_leaf(city, id);
            level.push(id);
        }
        debug_assert!(level.len() >= 2);
        while level.len() > 1 {
            let mut parents = Vec::with_capacity((level.len() + 1) / 2);
            for pair in level.chunks(2) {
                match *pair {
                    [left, right] => {
                        let kind = Kind::Internal { children: [left, right] };
                        let id = tree.push(WontVisitNode::new(kind));
                        tree.node_mut(left).parent = Some(id);
                        tree.node_mut(right).parent = Some(id);
                        parents.push(id);
                    }
                    [lone] => parents.push(lone),
                    _ => unreachable!(),
                }
            }
            level = parents;
        }
        tree.set_root(level[0]);
        WontVisitTree { tree }
    }
    pub fn root(&self) -> usize {
        self.tree.root()
    }
    pub fn kind(&self, id: usize) -> Kind {
        self.tree.node(id).kind
    }
    /// Consumes a city for the current epoch. The start and fixed-end cities
    /// have no leaf slot and are skipped; they are outside the interior set
    /// by convention.
    pub fn set_wont_visit(&mut self, city: usize, clock: &Clock) {
        self.mark_city(city, clock);
        debug_assert!(
            !self.root_wont_visit(clock),
            "tour extension requested with no unvisited city left"
        );
    }
    /// True iff every descendant leaf was marked this epoch. O(1): internal
    /// nodes cache the AND of their children, maintained on mark.
    pub fn subtree_wont_visit(&self, id: usize, clock: &Clock) -> bool {
        let node = self.tree.node(id);
        node.wont_visit && node.restart_seen == clock.wont_visit_restart_times
    }
    pub fn get_wont_visit(&self, city: usize, clock: &Clock) -> bool {
        match self.tree.leaf(city) {
            Some(leaf) => self.subtree_wont_visit(leaf, clock),
            None => true,
        }
    }
    pub fn root_wont_visit(&self, clock: &Clock) -> bool {
        self.subtree_wont_visit(self.tree.root(), clock)
    }
    pub(crate) fn mark_city(&mut self, city: usize, clock: &Clock) {
        if let Some(leaf) = self.tree.leaf(city) {
            self.mark(leaf, clock);
        }
    }
    fn mark(&mut self, leaf: usize, clock: &Clock) {
        let epoch = clock.wont_visit_restart_times;
        let node = self.tree.node_mut(leaf);
        node.wont_visit = true;
        node.restart_seen = epoch;

        // fold the AND upward, stopping at the first parent left unflipped
        let mut id = leaf;
        while let Some(parent) = self.tree.node(id).parent {
            let children = match self.tree.node(parent).kind {
                Kind::Internal { children } => children,
                Kind::Leaf { .. } => unreachable!(),
            };
            let both = self.subtree_wont_visit(children[0], clock)
                && self.subtree_wont_visit(children[1], clock);
            if !both {
                break;
            }
            let node = self.tree.node_mut(parent);
            node.wont_visit = true;
            node.restart_seen = epoch;
            id = parent;
        }
    }
}

fn copy_shape(tree: &mut Tree<WontVisitNode>, building: &BuildingTree, from: usize) -> usize {
    match building.node(from).kind {
        Kind::Leaf { city } => {
            let id = tree.push(WontVisitNode::new(Kind::Leaf { city }));
            tree.set_leaf(city, id);
            id
        }
        Kind::Internal { children } => {
            let child0 = copy_shape(tree, building, children[0]);
            let child1 = copy_shape(tree, building, children[1]);
            let kind = Kind::Internal { children: [child0, child1] };
            let id = tree.push(WontVisitNode::new(kind));
            tree.node_mut(child0).parent = Some(id);
            tree.node_mut(child1).parent = Some(id);
            id
        }
    }
}
