mod bifrost;

use std::sync::Arc;

pub use bifrost::{BifrostConfiguration, NARROW_N};

use super::{GemmShape, LhsMatrixInfo, RhsMatrixInfo};
use crate::{
    DataType, Error,
    device::DeviceFeatures,
    gpu_target::{GpuArchitecture, GpuTarget},
};

/// Picks the reshape descriptors for a GEMM on a fixed GPU target.
pub trait GemmKernelConfiguration {
    fn target(&self) -> GpuTarget;

    fn configure(
        &self,
        shape: GemmShape,
        data_type: DataType,
    ) -> Result<(LhsMatrixInfo, RhsMatrixInfo), Error>;
}

/// Reshaped GEMM configuration for each supported architecture family.
#[derive(Debug, Clone)]
pub enum ReshapedKernelConfiguration {
    Bifrost(BifrostConfiguration),
}

impl ReshapedKernelConfiguration {
    pub fn new(
        target: GpuTarget,
        device: Arc<dyn DeviceFeatures>,
    ) -> Result<Self, Error> {
        match target.architecture() {
            GpuArchitecture::Midgard | GpuArchitecture::Bifrost => {
                Ok(Self::Bifrost(BifrostConfiguration::new(target, device)))
            },
            GpuArchitecture::Valhall | GpuArchitecture::Unknown => Err(Error::UnsupportedTarget(target)),
        }
    }
}

impl GemmKernelConfiguration for ReshapedKernelConfiguration {
    fn target(&self) -> GpuTarget {
        match self {
            Self::Bifrost(configuration) => configuration.target(),
        }
    }

    fn configure(
        &self,
        shape: GemmShape,
        data_type: DataType,
    ) -> Result<(LhsMatrixInfo, RhsMatrixInfo), Error> {
        match self {
            Self::Bifrost(configuration) => configuration.configure(shape, data_type),
        }
    }
}

/// Builds the configuration for `target` and runs a single selection.
pub fn configure(
    target: GpuTarget,
    device: Arc<dyn DeviceFeatures>,
    shape: GemmShape,
    data_type: DataType,
) -> Result<(LhsMatrixInfo, RhsMatrixInfo), Error> {
    ReshapedKernelConfiguration::new(target, device)?.configure(shape, data_type)
}
