use super::*;
use crate::helpers::som::*;

#[test]
fn can_get_network_state() {
    let data = create_two_cluster_data((0., 0.), (10., 10.));
    let mut network = create_test_network(data, SomConfig::new(2, 2, 20));
    network.train(false);

    let state = get_network_state(&network);

    assert_eq!(state.shape, (2, 2, 2));
    assert_eq!(state.neurons.len(), 4);
    state.neurons.iter().enumerate().for_each(|(idx, neuron)| {
        assert_eq!(neuron.location, network.neurons()[idx].location);
        assert_eq!(neuron.weights.len(), 2);
        assert_eq!(neuron.award, network.awards(idx));
        assert!(neuron.unified_distance > 0.);
    });
}

#[test]
fn can_skip_unified_distance_without_couplings() {
    let data = create_two_cluster_data((0., 0.), (10., 10.));
    let mut config = SomConfig::new(2, 2, 20);
    config.connection_policy = ConnectionPolicy::FuncNeighbor;
    let network = create_test_network(data, config);

    let state = get_network_state(&network);

    state.neurons.iter().for_each(|neuron| assert_eq!(neuron.unified_distance, 0.));
}

#[test]
fn can_display_network_state() {
    let data = create_two_cluster_data((0., 0.), (10., 10.));
    let network = create_test_network(data, SomConfig::new(2, 2, 20));

    let encoded = format!("{}", get_network_state(&network));

    assert!(encoded.starts_with("(2,2,2,[("));
    assert_eq!(encoded.matches("],[").count(), 4);
}
