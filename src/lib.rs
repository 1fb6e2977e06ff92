#![doc = include_str!("../README.md")]

mod cost;
mod error;
mod graph;
mod routing;

pub use cost::{CostArithmetic, DecimalArithmetic};
pub use error::PathError;
pub use graph::WeightedGraph;
pub use routing::{Path, ShortestPathEngine};
