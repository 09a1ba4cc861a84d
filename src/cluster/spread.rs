use itertools::Itertools;
use ordered_float::OrderedFloat;
use super::{Bisection, TwoWaySplit, centroid_of, wider_axis};
use crate::component::Point;

/// Median split along the axis with the wider spread.
#[derive(Clone, Debug, Default)]
pub struct MaxSpread;

impl TwoWaySplit for MaxSpread {
    fn split(&self, points: &[Point]) -> Bisection {
        debug_assert!(points.len() >= 2);
        let axis = wider_axis(points);
        let order = (0..points.len())
            .sorted_by_key(|&i| OrderedFloat(points[i][axis]))
            .collect_vec();
        let half = points.len() / 2;
        let mut side = vec![0; points.len()];
        for &i in &order[half..] {
            side[i] = 1;
        }
        let centroids = [centroid_of(points, &side, 0), centroid_of(points, &side, 1)];
        Bisection { side, centroids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_splits_at_the_median() {
        let points = vec![[4.0, 0.0], [1.0, 0.0], [3.0, 0.0], [2.0, 0.0]];
        let bisection = MaxSpread.split(&points);
        assert_eq!(bisection.side, vec![1, 0, 1, 0]);
        assert_eq!(bisection.centroids[0], [1.5, 0.0]);
        assert_eq!(bisection.centroids[1], [3.5, 0.0]);
    }

    #[test]
    fn it_prefers_the_wider_axis() {
        let points = vec![[0.0, 0.0], [1.0, 9.0], [0.5, 1.0], [0.2, 8.0]];
        let bisection = MaxSpread.split(&points);
        assert_eq!(bisection.side, vec![0, 1, 0, 1]);
    }
}
