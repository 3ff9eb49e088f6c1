pub mod config;
pub use config::{ConfigError, DeviceDescription};

pub mod data_type;
pub use data_type::DataType;

pub mod device;
pub use device::{DeviceFeatures, Feature};

mod error;
pub use error::Error;

pub mod gemm;
pub use gemm::{
    GemmKernelConfiguration, GemmShape, LhsMatrixInfo, NARROW_N, ReshapedKernelConfiguration, RhsMatrixInfo, configure,
};

pub mod gpu_target;
pub use gpu_target::{GpuArchitecture, GpuTarget};
