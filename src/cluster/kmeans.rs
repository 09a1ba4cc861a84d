use itertools::Itertools;
use ordered_float::OrderedFloat;
use super::{Bisection, TwoWaySplit, centroid_of, wider_axis};
use crate::component::{distance, Point};

const MAX_ITER: usize = 32;
const TOLERANCE: f64 = 1e-9;

/// Lloyd's algorithm with k fixed at 2. Seeds are the extreme points along
/// the wider axis, so repeated splits of the same cluster are deterministic.
#[derive(Clone, Debug, Default)]
pub struct KMeans;

impl TwoWaySplit for KMeans {
    fn split(&self, points: &[Point]) -> Bisection {
        debug_assert!(points.len() >= 2);
        let axis = wider_axis(points);
        let lo = points.iter().position_min_by_key(|p| OrderedFloat(p[axis]));
        let hi = points.iter().position_max_by_key(|p| OrderedFloat(p[axis]));
        let (lo, hi) = (lo.unwrap(), hi.unwrap());

        if points[lo] == points[hi] {
            // every point coincides; split by parity to keep both sides alive
            let side = (0..points.len()).map(|i| i % 2).collect_vec();
            let centroids = [points[0], points[0]];
            return Bisection { side, centroids };
        }

        let mut centroids = [points[lo], points[hi]];
        let mut side = vec![0; points.len()];
        for _ in 0..MAX_ITER {
            for (i, point) in points.iter().enumerate() {
                let nearer = distance(*point, centroids[1]) < distance(*point, centroids[0]);
                side[i] = nearer as usize;
            }
            rescue_empty_side(points, &mut side, &centroids);
            let updated = [centroid_of(points, &side, 0), centroid_of(points, &side, 1)];
            let moved = distance(updated[0], centroids[0]) + distance(updated[1], centroids[1]);
            centroids = updated;
            if moved < TOLERANCE {
                break;
            }
        }
        Bisection { side, centroids }
    }
}

/// Degenerate assignments may drain one side; hand it the point farthest
/// from the crowded side's centroid.
fn rescue_empty_side(points: &[Point], side: &mut [usize], centroids: &[Point; 2]) {
    for which in 0..2 {
        if side.iter().any(|&bit| bit == which) {
            continue;
        }
        let exile = (0..points.len())
            .position_max_by_key(|&i| OrderedFloat(distance(points[i], centroids[1 - which])))
            .unwrap();
        side[exile] = which;
    }
}
