//! Algorithms over the sequence containers
//!
//! Currently the ordered-set algebra: merge, union, difference and
//! intersection over any [`OrderedSequence`].

pub mod set_algebra;

pub use set_algebra::{
    merge, set_difference, set_intersection, set_union, AlgebraStats, OrderedSequence,
    SetAlgebra,
};
