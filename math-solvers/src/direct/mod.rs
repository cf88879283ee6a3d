//! Direct solvers for dense linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`lu_solve`] / [`solve_in_place`]: LU decomposition with implicit scaling
//!   and partial pivoting
//! - [`solve_batch`]: many independent small systems at once

mod batch;
mod lu;

pub use batch::solve_batch;
pub use lu::{
    LuDecomposition, LuFactors, lu_decompose_in_place, lu_solve, solve_in_place,
    solve_in_place_with_config,
};
