use itertools::izip;
use super::{Kind, Tree};
use crate::cluster::{ClusterEnum, TwoWaySplit};
use crate::component::{Cities, Point};

#[derive(Clone, Debug)]
pub struct BuildingNode {
    pub parent: Option<usize>,
    pub kind: Kind,
    pub centroid: Point,
}

/// Static spatial partition of the interior cities. Only the shape and the
/// centroids outlive construction; the trail and won't-visit trees copy what
/// they need and this tree can be cached for any origin city.
#[derive(Clone, Debug)]
pub struct BuildingTree {
    tree: Tree<BuildingNode>,
}

impl BuildingTree {
    pub fn new(cities: &Cities, splitter: &ClusterEnum) -> Self {
        let indexes: Vec<usize> = cities.interior().collect();
        debug_assert!(indexes.len() >= 2);
        let points: Vec<Point> = indexes.iter().map(|&city| cities.coord(city)).collect();
        let centroid = mean(&points);
        let mut tree = Tree::new(cities.len());
        let root = build(&mut tree, indexes, points, centroid, splitter);
        tree.set_root(root);
        BuildingTree { tree }
    }
    pub fn root(&self) -> usize {
        self.tree.root()
    }
    pub fn node(&self, id: usize) -> &BuildingNode {
        self.tree.node(id)
    }
    pub fn num_city(&self) -> usize {
        self.tree.num_city()
    }
}

fn build(
    tree: &mut Tree<BuildingNode>,
    indexes: Vec<usize>,
    points: Vec<Point>,
    centroid: Point,
    splitter: &ClusterEnum,
) -> usize {
    if let [city] = *indexes {
        let kind = Kind::Leaf { city };
        return tree.push(BuildingNode { parent: None, kind, centroid: points[0] });
    }

    let bisection = splitter.split(&points);
    let mut sides: [(Vec<usize>, Vec<Point>); 2] = Default::default();
    for (&bit, index, point) in izip!(&bisection.side, indexes, points) {
        sides[bit].0.push(index);
        sides[bit].1.push(point);
    }
    debug_assert!(!sides[0].0.is_empty() && !sides[1].0.is_empty());

    let [side0, side1] = sides;
    let child0 = build(tree, side0.0, side0.1, bisection.centroids[0], splitter);
    let child1 = build(tree, side1.0, side1.1, bisection.centroids[1], splitter);
    let kind = Kind::Internal { children: [child0, child1] };
    let id = tree.push(BuildingNode { parent: None, kind, centroid });
    tree.node_mut(child0).parent = Some(id);
    tree.node_mut(child1).parent = Some(id);
    id
}

fn mean(points: &[Point]) -> Point {
    let mut sum = [0.0, 0.0];
    for point in points {
        sum[0] += point[0];
        sum[1] += point[1];
    }
    [sum[0] / points.len() as f64, sum[1] / points.len() as f64]
}
