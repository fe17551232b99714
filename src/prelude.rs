//! This module reimports commonly used types.

pub use crate::som::get_network_state;
pub use crate::som::ConnectionPolicy;
pub use crate::som::InitPolicy;
pub use crate::som::Input;
pub use crate::som::Network;
pub use crate::som::NetworkState;
pub use crate::som::Neuron;
pub use crate::som::NeuronState;
pub use crate::som::SomConfig;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::{Random, RandomGen};
