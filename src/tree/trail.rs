use rand::Rng;
use rand_chacha::ChaChaRng;
use super::{BuildingTree, Kind, Tree, TrailNode, WontVisitTree};
use crate::component::{Cities, Clock, Params};

/// Pheromone trail tree for one origin city. Leaves stand for the interior
/// cities; an internal node's pheromone and heuristic summarize its whole
/// subtree, which is what makes the O(log n) descent possible.
#[derive(Clone, Debug)]
pub struct TrailTree {
    tree: Tree<TrailNode>,
}

impl TrailTree {
    /// Top-down: copy the shape of a building tree, scoring every node by
    /// inverse distance from the origin to its cluster centroid.
    pub fn top_down(
        cities: &Cities,
        origin: usize,
        building: &BuildingTree,
        params: &Params,
        clock: &Clock,
    ) -> Self {
        let mut tree = Tree::new(cities.len());
        let root = copy_shape(&mut tree, building, building.root(), cities, origin, params, clock);
        tree.set_root(root);
        TrailTree { tree }
    }
    /// Bottom-up: pair leaves in city order, carrying an odd node forward.
    /// Balanced but spatially arbitrary.
    pub fn bottom_up(cities: &Cities, origin: usize, params: &Params, clock: &Clock) -> Self {
        let mut tree = Tree::new(cities.len());
        let mut level = vec![];
        for city in cities.interior() {
            let heuristic = cities.heuristic(origin, city);
            let id = tree.push(TrailNode::new(Kind::Leaf { city }, heuristic, params, clock));
            tree.set_leaf(city, id);
            level.push(id);
        }
        debug_assert!(level.len() >= 2);
        while level.len() > 1 {
            let mut parents = Vec::with_capacity((level.len() + 1) / 2);
            for pair in level.chunks(2) {
                match *pair {
                    [left, right] => {
                        let heuristic =
                            (tree.node(left).heuristic() + tree.node(right).heuristic()) / 2.0;
                        let kind = Kind::Internal { children: [left, right] };
                        let id = tree.push(TrailNode::new(kind, heuristic, params, clock));
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
        TrailTree { tree }
    }
    /// Descends both trees in lock-step and returns the chosen leaf's city.
    /// The caller must keep at least one interior city unvisited.
    pub fn choose_next_city(
        &mut self,
        wont_visit: &WontVisitTree,
        params: &Params,
        clock: &Clock,
        rng: &mut ChaChaRng,
    ) -> usize {
        let mut current = self.tree.root();
        let mut shadow = wont_visit.root();
        loop {
            let children = match self.tree.node(current).kind {
                Kind::Leaf { city } => return city,
                Kind::Internal { children } => children,
            };
            let shadows = match wont_visit.kind(shadow) {
                Kind::Internal { children } => children,
                Kind::Leaf { .. } => unreachable!("won't-visit tree shape diverged"),
            };
            let masked = [
                wont_visit.subtree_wont_visit(shadows[0], clock),
                wont_visit.subtree_wont_visit(shadows[1], clock),
            ];
            let next = match masked {
                [true, false] => 1,
                [false, true] => 0,
                [false, false] => self.choose_child(children, params, clock, rng),
                [true, true] => panic!("choose_next_city under a fully visited node"),
            };
            current = children[next];
            shadow = shadows[next];
        }
    }
    /// Deposits along the leaf-to-root path, root excluded, refreshing each
    /// node's lazy evaporation first.
    pub fn reinforce(&mut self, city: usize, invert_fitness: f64, params: &Params, clock: &Clock) {
        let mut id = self.tree.leaf(city).expect("city has no trail leaf");
        while let Some(parent) = self.tree.node(id).parent {
            self.tree.node_mut(id).reinforce(invert_fitness, params, clock);
            id = parent;
        }
    }
    /// Read-only lazily-evaporated pheromone for one city.
    pub fn leaf_pheromone(&self, city: usize, params: &Params, clock: &Clock) -> f64 {
        let id = self.tree.leaf(city).expect("city has no trail leaf");
        self.tree.node(id).peek_pheromone(params, clock)
    }
    pub fn height(&self) -> usize {
        self.height_below(self.tree.root())
    }
    /// Pseudo-random-proportional rule over the two children's aggregates:
    /// with probability q0 exploit the strictly greater score (ties favor
    /// the left child), otherwise draw proportionally.
    fn choose_child(
        &mut self,
        children: [usize; 2],
        params: &Params,
        clock: &Clock,
        rng: &mut ChaChaRng,
    ) -> usize {
        let score0 = self.tree.node_mut(children[0]).score(params, clock);
        let score1 = self.tree.node_mut(children[1]).score(params, clock);
        match rng.gen_range(0.0..1.0) >= params.one_minus_q0 {
            true => (score1 > score0) as usize,
            false => (rng.gen_range(0.0..score0 + score1) >= score0) as usize,
        }
    }
    fn height_below(&self, id: usize) -> usize {
        match self.tree.node(id).kind {
            Kind::Leaf { .. } => 0,
            Kind::Internal { children } => {
                1 + usize::max(self.height_below(children[0]), self.height_below(children[1]))
            }
        }
    }
}

fn copy_shape(
    tree: &mut Tree<TrailNode>,
    building: &BuildingTree,
    from: usize,
    cities: &Cities,
    origin: usize,
    params: &Params,
    clock: &Clock,
) -> usize {
    let heuristic = cities.heuristic_to(origin, building.node(from).centroid);
    match building.node(from).kind {
        Kind::Leaf { city } => {
            let id = tree.push(TrailNode::new(Kind::Leaf { city }, heuristic, params, clock));
            tree.set_leaf(city, id);
            id
        }
        Kind::Internal { children } => {
            let child0 = copy_shape(tree, building, children[0], cities, origin, params, clock);
            let child1 = copy_shape(tree, building, children[1], cities, origin, params, clock);
            let kind = Kind::Internal { children: [child0, child1] };
            let id = tree.push(TrailNode::new(kind, heuristic, params, clock));
            tree.node_mut(child0).parent = Some(id);
            tree.node_mut(child1).parent = Some(id);
            id
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use super::*;

    fn setup(num_interior: usize) -> (Cities, Params, Clock) {
        let mut coords = vec![[0.0, 0.0]];
        coords.extend((0..num_interior).map(|i| [i as f64 + 1.0, 0.0]));
        coords.push([99.0, 0.0]);
        let cities = Cities::new(coords, true);
        (cities, Params::default(), Clock::new())
    }

    #[test]
    fn it_builds_bottom_up_with_logarithmic_height() {
        for num_interior in 2..=17 {
            let (cities, params, clock) = setup(num_interior);
            let tree = TrailTree::bottom_up(&cities, 0, &params, &clock);
            let bound = (num_interior as f64).log2().ceil() as usize;
            assert!(tree.height() <= bound + 1, "{} leaves, height {}", num_interior, tree.height());
            assert!(tree.height() >= bound, "{} leaves, height {}", num_interior, tree.height());
        }
    }

    #[test]
    fn it_excludes_start_and_terminal_leaves() {
        let (cities, params, clock) = setup(4);
        let tree = TrailTree::bottom_up(&cities, 0, &params, &clock);
        assert!(tree.tree.leaf(0).is_none());
        assert!(tree.tree.leaf(cities.len() - 1).is_none());
        assert!((1..=4).all(|city| tree.tree.leaf(city).is_some()));
    }

    #[test]
    fn it_reinforces_ancestors_only() {
        let (cities, params, clock) = setup(4);
        let mut tree = TrailTree::bottom_up(&cities, 0, &params, &clock);
        let before: Vec<f64> = (1..=4)
            .map(|city| tree.leaf_pheromone(city, &params, &clock))
            .collect();
        tree.reinforce(2, 0.1, &params, &clock);
        let after: Vec<f64> = (1..=4)
            .map(|city| tree.leaf_pheromone(city, &params, &clock))
            .collect();
        assert!(after[1] > before[1]);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[3], before[3]);
    }

    #[test]
    fn it_descends_deterministically_around_the_mask() {
        let (cities, params, mut clock) = setup(4);
        let mut tree = TrailTree::bottom_up(&cities, 0, &params, &clock);
        let mut wont_visit = WontVisitTree::bottom_up(&cities);
        let mut rng = ChaChaRng::seed_from_u64(42);
        for city in [1, 2, 4].iter() {
            wont_visit.set_wont_visit(*city, &clock);
        }
        for _ in 0..10 {
            assert_eq!(tree.choose_next_city(&wont_visit, &params, &clock, &mut rng), 3);
        }
        // a fresh epoch unmasks every city again
        clock.clear_visits();
        let chosen = tree.choose_next_city(&wont_visit, &params, &clock, &mut rng);
        assert!((1..=4).contains(&chosen));
    }

    #[test]
    #[should_panic]
    fn it_rejects_descent_below_a_fully_visited_node() {
        let (cities, params, clock) = setup(2);
        let mut tree = TrailTree::bottom_up(&cities, 0, &params, &clock);
        let mut wont_visit = WontVisitTree::bottom_up(&cities);
        // bypass set_wont_visit's own guard
        for city in 1..=2 {
            wont_visit.mark_city(city, &clock);
        }
        let mut rng = ChaChaRng::seed_from_u64(42);
        tree.choose_next_city(&wont_visit, &params, &clock, &mut rng);
    }

    #[test]
    fn it_matches_top_down_and_building_shapes() {
        let (cities, params, clock) = setup(7);
        let building = BuildingTree::new(&cities, &crate::cluster::KMeans.into());
        let mut tree = TrailTree::top_down(&cities, 0, &building, &params, &clock);
        let wont_visit = WontVisitTree::top_down(&cities, &building);
        let mut rng = ChaChaRng::seed_from_u64(7);
        let chosen = tree.choose_next_city(&wont_visit, &params, &clock, &mut rng);
        assert!((1..=7).contains(&chosen));
        tree.reinforce(chosen, 0.2, &params, &clock);
        assert!(tree.leaf_pheromone(chosen, &params, &clock) > params.trail_restart);
    }
}
