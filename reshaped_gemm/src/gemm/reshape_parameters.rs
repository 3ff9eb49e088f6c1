use super::matrix_info::{LhsMatrixInfo, RhsMatrixInfo};

/// Raw block sizes and layout flags for a reshaped GEMM.
///
/// Field order matches [`ReshapeParameters::new`], which is the order the
/// per-architecture tables are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReshapeParameters {
    pub m0: u32,
    pub n0: u32,
    pub k0: u32,
    pub v0: u32,
    pub h0: u32,
    pub lhs_interleave: bool,
    pub rhs_interleave: bool,
    pub lhs_transpose: bool,
    pub rhs_transpose: bool,
}

impl ReshapeParameters {
    pub const fn new(
        m0: u32,
        n0: u32,
        k0: u32,
        v0: u32,
        h0: u32,
        lhs_interleave: bool,
        rhs_interleave: bool,
        lhs_transpose: bool,
        rhs_transpose: bool,
    ) -> Self {
        assert!(m0 > 0 && n0 > 0 && k0 > 0, "block sizes must be positive");
        assert!(v0 > 0 && h0 > 0, "block multipliers must be positive");
        Self {
            m0,
            n0,
            k0,
            v0,
            h0,
            lhs_interleave,
            rhs_interleave,
            lhs_transpose,
            rhs_transpose,
        }
    }
}

/// Assembles the LHS/RHS reshape descriptors for an `m x n` output.
///
/// `v0` and `h0` collapse to 1 when `m` (resp. `n`) cannot hold a single
/// group of `v0` (resp. `h0`) blocks. The RHS shares the LHS `k0`.
pub fn configure_lhs_rhs_info(
    m: u32,
    n: u32,
    parameters: &ReshapeParameters,
) -> (LhsMatrixInfo, RhsMatrixInfo) {
    let lhs_info = LhsMatrixInfo {
        m0: parameters.m0,
        k0: parameters.k0,
        v0: block_multiplier(m, parameters.m0, parameters.v0),
        transpose: parameters.lhs_transpose,
        interleave: parameters.lhs_interleave,
    };

    let rhs_info = RhsMatrixInfo {
        n0: parameters.n0,
        k0: lhs_info.k0,
        h0: block_multiplier(n, parameters.n0, parameters.h0),
        transpose: parameters.rhs_transpose,
        interleave: parameters.rhs_interleave,
        export_to_image: false,
    };

    (lhs_info, rhs_info)
}

/// `multiplier`, or 1 if `extent` holds no full group of `multiplier` blocks.
/// A group wider than `u32::MAX` never fits.
fn block_multiplier(
    extent: u32,
    block: u32,
    multiplier: u32,
) -> u32 {
    match block.checked_mul(multiplier) {
        Some(group) if extent / group > 0 => multiplier,
        _ => 1,
    }
}
