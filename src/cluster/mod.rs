mod kmeans;
mod spread;

pub use kmeans::KMeans;
pub use spread::MaxSpread;

use enum_dispatch::enum_dispatch;
use crate::component::Point;

/// Outcome of one 2-way split: a side bit per input point plus the centroid
/// of each side. Implementations guarantee both sides are populated whenever
/// two or more points go in.
#[derive(Clone, Debug)]
pub struct Bisection {
    pub side: Vec<usize>,
    pub centroids: [Point; 2],
}

#[enum_dispatch]
pub enum ClusterEnum {
    KMeans,
    MaxSpread,
}

#[enum_dispatch(ClusterEnum)]
pub trait TwoWaySplit {
    fn split(&self, points: &[Point]) -> Bisection;
}

fn wider_axis(points: &[Point]) -> usize {
    let spread = |axis: usize| {
        let lo = points.iter().map(|p| p[axis]).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(|p| p[axis]).fold(f64::NEG_INFINITY, f64::max);
        hi - lo
    };
    match spread(1) > spread(0) {
        true => 1,
        false => 0,
    }
}

fn centroid_of(points: &[Point], side: &[usize], which: usize) -> Point {
    let mut sum = [0.0, 0.0];
    let mut count = 0;
    for (point, &bit) in points.iter().zip(side.iter()) {
        if bit == which {
            sum[0] += point[0];
            sum[1] += point[1];
            count += 1;
        }
    }
    debug_assert!(count > 0);
    [sum[0] / count as f64, sum[1] / count as f64]
}
