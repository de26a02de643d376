//! Ports to external geometry/statistics, with default implementations.
//!
//! The measures only see the traits:
//! - `ConvexHullAdapter` (default `MonotoneChainHull`)
//! - `GmmAdapter` (default `EmGmm`, seedable)
//!
//! Swap in another library by implementing the trait; nothing else changes.

mod gmm;
mod hull;

pub use gmm::{EmGmm, GmmAdapter, GmmFit};
pub use hull::{ConvexHullAdapter, ConvexHullResult, MonotoneChainHull};
