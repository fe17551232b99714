//! This crate provides building blocks for training a Self-Organizing Map (SOM): a fixed
//! grid of prototype vectors ("neurons") which is iteratively adapted by competitive
//! learning so that neighboring grid positions represent similar regions of the input
//! space. The result is a topology preserving, dimensionality-reduced map of a dataset.
//!
//! Dataset ingestion and visualization are left to the caller: the network exposes read
//! accessors (weights, couplings, awards, captured sample indices) and a serializable
//! state snapshot which external consumers can render.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod prelude;
pub mod som;
pub mod utils;
