use super::*;
use crate::helpers::som::Sample;
use crate::utils::DefaultRandom;

fn create_span_data() -> Vec<Sample> {
    // spans [0, 10] x [0, 10]
    vec![Sample::new(0., 0.), Sample::new(10., 10.), Sample::new(5., 3.), Sample::new(2., 7.)]
}

#[test]
fn can_compute_bounding_box() {
    let data = vec![Sample::new_3d(1., -2., 3.), Sample::new_3d(5., 4., -1.), Sample::new_3d(3., 0., 0.)];

    let bounds = BoundingBox::new(data.as_slice());

    assert_eq!(bounds.minimums, vec![1., -2., -1.]);
    assert_eq!(bounds.maximums, vec![5., 4., 3.]);
    assert_eq!(bounds.centers, vec![3., 1., 1.]);
    assert_eq!(bounds.widths, vec![4., 6., 4.]);
}

#[test]
fn can_place_uniform_grid_on_lattice() {
    let topology = GridTopology::new(3, 3, ConnectionPolicy::GridEight);
    let data = create_span_data();
    let bounds = BoundingBox::new(data.as_slice());

    let weights = create_initial_weights(&topology, InitPolicy::UniformGrid, &bounds, &DefaultRandom::default());

    // row-major 3x3 lattice over {0, 5, 10} x {0, 5, 10}
    let lattice = [
        [0., 0.],
        [0., 5.],
        [0., 10.],
        [5., 0.],
        [5., 5.],
        [5., 10.],
        [10., 0.],
        [10., 5.],
        [10., 10.],
    ];
    weights.iter().zip(lattice.iter()).for_each(|(weights, expected)| {
        assert_eq!(weights.as_slice(), expected.as_slice());
    });
}

#[test]
fn can_collapse_uniform_grid_on_single_row() {
    let topology = GridTopology::new(1, 2, ConnectionPolicy::GridEight);
    let data = create_span_data();
    let bounds = BoundingBox::new(data.as_slice());

    let weights = create_initial_weights(&topology, InitPolicy::UniformGrid, &bounds, &DefaultRandom::default());

    // a single row collapses the first dimension to the bounding box center
    assert_eq!(weights[0].as_slice(), [5., 0.]);
    assert_eq!(weights[1].as_slice(), [5., 10.]);
}

#[test]
fn can_center_uniform_grid_in_higher_dimensions() {
    let topology = GridTopology::new(2, 2, ConnectionPolicy::GridEight);
    let data = vec![Sample::new_3d(0., 0., 2.), Sample::new_3d(10., 10., 6.)];
    let bounds = BoundingBox::new(data.as_slice());

    let weights = create_initial_weights(&topology, InitPolicy::UniformGrid, &bounds, &DefaultRandom::default());

    weights.iter().for_each(|weights| assert_eq!(weights[2], 4.));
}

#[test]
fn can_init_random_surface_within_bounds() {
    let topology = GridTopology::new(4, 4, ConnectionPolicy::GridEight);
    let data = create_span_data();
    let bounds = BoundingBox::new(data.as_slice());

    let weights = create_initial_weights(&topology, InitPolicy::RandomSurface, &bounds, &DefaultRandom::default());

    assert_eq!(weights.len(), 16);
    weights.iter().for_each(|weights| {
        weights.iter().enumerate().for_each(|(dim, &value)| {
            assert!(value >= bounds.minimums[dim]);
            assert!(value <= bounds.maximums[dim]);
        });
    });
}

#[test]
fn can_init_random_centroid_around_center() {
    let topology = GridTopology::new(4, 4, ConnectionPolicy::GridEight);
    let data = create_span_data();
    let bounds = BoundingBox::new(data.as_slice());

    let weights = create_initial_weights(&topology, InitPolicy::RandomCentroid, &bounds, &DefaultRandom::default());

    weights.iter().for_each(|weights| {
        weights.iter().enumerate().for_each(|(dim, &value)| {
            assert!(value >= bounds.centers[dim]);
            assert!(value < bounds.centers[dim] + 1.);
        });
    });
}
