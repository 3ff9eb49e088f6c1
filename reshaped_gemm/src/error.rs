use thiserror::Error;

use crate::{data_type::DataType, gpu_target::GpuTarget};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Not supported data type {data_type} for GPU target {target}")]
    UnsupportedDataType {
        target: GpuTarget,
        data_type: DataType,
    },
    #[error("Not supported GPU target {0}")]
    UnsupportedTarget(GpuTarget),
}
