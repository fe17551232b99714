#[cfg(test)]
#[path = "../../tests/unit/som/init_test.rs"]
mod init_test;

use super::*;
use crate::utils::{compare_floats, Random};
use std::cmp::Ordering;

/// A per-dimension bounding box of the dataset, used to seed initial neuron weights.
pub(crate) struct BoundingBox {
    pub minimums: Vec<Float>,
    pub maximums: Vec<Float>,
    pub centers: Vec<Float>,
    pub widths: Vec<Float>,
}

impl BoundingBox {
    /// Scans the dataset and returns observed bounds per dimension.
    /// Bounds are used exactly as observed, no extra margin is applied.
    pub fn new<I: Input>(data: &[I]) -> Self {
        let mut minimums = data[0].weights().to_vec();
        let mut maximums = data[0].weights().to_vec();

        for item in data.iter().skip(1) {
            for (dim, &value) in item.weights().iter().enumerate() {
                match (compare_floats(value, minimums[dim]), compare_floats(value, maximums[dim])) {
                    (Ordering::Less, _) => minimums[dim] = value,
                    (_, Ordering::Greater) => maximums[dim] = value,
                    _ => {}
                }
            }
        }

        let centers =
            minimums.iter().zip(maximums.iter()).map(|(&min, &max)| (min + max) / 2.).collect::<Vec<_>>();
        let widths = minimums.iter().zip(maximums.iter()).map(|(&min, &max)| max - min).collect::<Vec<_>>();

        Self { minimums, maximums, centers, widths }
    }
}

/// Generates initial weights for every grid cell according to given policy.
pub(crate) fn create_initial_weights(
    topology: &GridTopology,
    policy: InitPolicy,
    bounds: &BoundingBox,
    random: &(dyn Random + Send + Sync),
) -> Vec<Vec<Float>> {
    let dimension = bounds.minimums.len();
    let (rows, cols) = (topology.rows(), topology.cols());

    (0..topology.size())
        .map(|index| {
            let (row, col) = topology.location(index);

            (0..dimension)
                .map(|dim| match policy {
                    // a regular lattice over dims 0 and 1, centered in the others; an axis
                    // with a single cell collapses to the bounding box center
                    InitPolicy::UniformGrid => match dim {
                        0 if rows > 1 => bounds.minimums[0] + bounds.widths[0] / (rows - 1) as Float * row,
                        1 if cols > 1 => bounds.minimums[1] + bounds.widths[1] / (cols - 1) as Float * col,
                        _ => bounds.centers[dim],
                    },
                    InitPolicy::RandomSurface => random.uniform_real(bounds.minimums[dim], bounds.maximums[dim]),
                    InitPolicy::RandomCentroid => bounds.centers[dim] + random.uniform_real(0., 1.),
                })
                .collect()
        })
        .collect()
}
