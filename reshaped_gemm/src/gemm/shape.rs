use std::fmt;

use serde::{Deserialize, Serialize};

/// Dimensions of a single GEMM: `(M x K) * (K x N)` repeated `batch` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GemmShape {
    pub m: u32,
    pub n: u32,
    pub k: u32,
    pub batch: u32,
}

impl GemmShape {
    pub const fn new(
        m: u32,
        n: u32,
        k: u32,
        batch: u32,
    ) -> Self {
        Self {
            m,
            n,
            k,
            batch,
        }
    }
}

impl fmt::Display for GemmShape {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "M={} N={} K={} B={}", self.m, self.n, self.k, self.batch)
    }
}
