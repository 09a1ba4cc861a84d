use std::ops::Range;

pub type Point = [f64; 2];

pub fn distance(p: Point, q: Point) -> f64 {
    ((p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2)).sqrt()
}

/// Problem coordinates, in city-index order. City 0 is the fixed start; when
/// `fixed_end` is set the last city is a fixed terminal and both lie outside
/// the interior range the trees are built over.
#[derive(Clone, Debug)]
pub struct Cities {
    coords: Vec<Point>,
    fixed_end: bool,
}

impl Cities {
    pub fn new(coords: Vec<Point>, fixed_end: bool) -> Self {
        debug_assert!(coords.len() >= 3);
        Cities { coords, fixed_end }
    }
    pub fn len(&self) -> usize {
        self.coords.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    pub fn coord(&self, city: usize) -> Point {
        self.coords[city]
    }
    pub fn interior(&self) -> Range<usize> {
        match self.fixed_end {
            true => 1..self.coords.len() - 1,
            false => 1..self.coords.len(),
        }
    }
    /// Inverse distance from a city to an arbitrary point, the attractiveness
    /// measure fed into `pheromone^alpha * heuristic^beta`.
    pub fn heuristic_to(&self, city: usize, target: Point) -> f64 {
        let dist = distance(self.coords[city], target);
        match dist > 0.0 {
            true => 1.0 / dist,
            false => 1e6,
        }
    }
    pub fn heuristic(&self, from: usize, to: usize) -> f64 {
        self.heuristic_to(from, self.coords[to])
    }
}
