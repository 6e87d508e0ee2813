//! Core data structures for the protocell simulation.

pub mod cell;
pub mod environment;
pub mod network;
