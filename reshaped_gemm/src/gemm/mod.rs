mod matrix_info;
mod reshape_parameters;
pub mod reshaped;
mod shape;

pub use matrix_info::{LhsMatrixInfo, RhsMatrixInfo};
pub use reshape_parameters::{ReshapeParameters, configure_lhs_rhs_info};
pub use reshaped::{BifrostConfiguration, GemmKernelConfiguration, NARROW_N, ReshapedKernelConfiguration, configure};
pub use shape::GemmShape;
