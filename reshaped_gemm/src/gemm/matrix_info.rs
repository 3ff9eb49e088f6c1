use serde::{Deserialize, Serialize};

/// How the left-hand side matrix is reshaped before the multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LhsMatrixInfo {
    /// Rows processed per block.
    pub m0: u32,
    /// Reduction depth per block.
    pub k0: u32,
    /// Number of `m0 x k0` blocks stacked vertically in one reshaped row.
    pub v0: u32,
    /// Store each block transposed.
    pub transpose: bool,
    /// Interleave the `v0` blocks instead of placing them side by side.
    pub interleave: bool,
}

impl Default for LhsMatrixInfo {
    fn default() -> Self {
        Self {
            m0: 1,
            k0: 1,
            v0: 1,
            transpose: true,
            interleave: true,
        }
    }
}

/// How the right-hand side matrix is reshaped before the multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RhsMatrixInfo {
    /// Columns processed per block.
    pub n0: u32,
    /// Reduction depth per block. Always equal to the paired [`LhsMatrixInfo::k0`].
    pub k0: u32,
    /// Number of `k0 x n0` blocks placed horizontally in one reshaped row.
    pub h0: u32,
    pub transpose: bool,
    pub interleave: bool,
    /// Stage the reshaped matrix through image memory rather than a buffer.
    pub export_to_image: bool,
}

impl Default for RhsMatrixInfo {
    fn default() -> Self {
        Self {
            n0: 1,
            k0: 1,
            h0: 1,
            transpose: true,
            interleave: true,
            export_to_image: false,
        }
    }
}
