use std::{fmt, sync::Arc};

use super::GemmKernelConfiguration;
use crate::{
    DataType, Error,
    device::{DeviceFeatures, Feature},
    gemm::{GemmShape, LhsMatrixInfo, ReshapeParameters, RhsMatrixInfo, configure_lhs_rhs_info},
    gpu_target::GpuTarget,
};

type Heuristic = fn(&BifrostConfiguration, &GemmShape) -> (LhsMatrixInfo, RhsMatrixInfo);

/// Outputs at most this wide select the narrow tiling.
pub const NARROW_N: u32 = 4;

const G7X_F32_NARROW: ReshapeParameters = ReshapeParameters::new(4, 2, 8, 16, 16, true, false, false, true);
const G7X_F32_WIDE: ReshapeParameters = ReshapeParameters::new(5, 4, 4, 2, 16, false, true, false, true);
const G7X_F16_NARROW: ReshapeParameters = ReshapeParameters::new(4, 2, 8, 8, 2, true, true, true, false);
const G7X_F16_WIDE: ReshapeParameters = ReshapeParameters::new(4, 8, 4, 4, 2, true, true, true, false);
const G7X_U8_DOT8_NARROW: ReshapeParameters = ReshapeParameters::new(4, 2, 16, 2, 2, true, false, false, true);
const G7X_U8_DOT8_WIDE: ReshapeParameters = ReshapeParameters::new(4, 4, 16, 2, 2, true, false, false, true);
const G7X_U8_NARROW: ReshapeParameters = ReshapeParameters::new(4, 2, 8, 2, 2, true, false, false, true);
const G7X_U8_WIDE: ReshapeParameters = ReshapeParameters::new(6, 4, 4, 2, 2, true, true, false, true);

const G76_F32_NARROW: ReshapeParameters = ReshapeParameters::new(4, 2, 8, 16, 16, true, false, false, true);
const G76_F32_WIDE: ReshapeParameters = ReshapeParameters::new(4, 4, 2, 8, 16, false, false, false, true);
const G76_F16_NARROW: ReshapeParameters = ReshapeParameters::new(4, 4, 4, 8, 2, true, true, true, false);
const G76_F16_WIDE: ReshapeParameters = ReshapeParameters::new(4, 4, 4, 4, 8, true, true, true, false);
// G76 always has dot8, so its 8-bit blocks are written for it.
const G76_U8_NARROW: ReshapeParameters = ReshapeParameters::new(4, 2, 16, 4, 1, false, false, false, true);
const G76_U8_WIDE: ReshapeParameters = ReshapeParameters::new(4, 4, 16, 2, 2, false, true, false, true);

const fn narrow_or_wide(
    shape: &GemmShape,
    narrow: ReshapeParameters,
    wide: ReshapeParameters,
) -> ReshapeParameters {
    if shape.n <= NARROW_N {
        narrow
    } else {
        wide
    }
}

/// Reshaped GEMM heuristics for Bifrost (and Midgard) GPUs.
///
/// G76 has its own table, every other target shares the G7x one.
#[derive(Clone)]
pub struct BifrostConfiguration {
    target: GpuTarget,
    device: Arc<dyn DeviceFeatures>,
}

impl fmt::Debug for BifrostConfiguration {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("BifrostConfiguration").field("target", &self.target).finish_non_exhaustive()
    }
}

impl BifrostConfiguration {
    pub fn new(
        target: GpuTarget,
        device: Arc<dyn DeviceFeatures>,
    ) -> Self {
        Self {
            target,
            device,
        }
    }

    fn heuristic(
        &self,
        data_type: DataType,
    ) -> Option<Heuristic> {
        match self.target {
            GpuTarget::G76 => Self::g76_heuristic(data_type),
            _ => {
                tracing::trace!(target_gpu = %self.target, "Using G7x reshaped GEMM table");
                Self::g7x_heuristic(data_type)
            },
        }
    }

    fn g76_heuristic(data_type: DataType) -> Option<Heuristic> {
        match data_type {
            DataType::F32 => Some(Self::configure_g76_f32),
            DataType::F16 => Some(Self::configure_g76_f16),
            DataType::QASYMM8 => Some(Self::configure_g76_u8),
            _ => None,
        }
    }

    fn g7x_heuristic(data_type: DataType) -> Option<Heuristic> {
        match data_type {
            DataType::F32 => Some(Self::configure_g7x_f32),
            DataType::F16 => Some(Self::configure_g7x_f16),
            DataType::QASYMM8 => Some(Self::configure_g7x_u8),
            _ => None,
        }
    }

    fn dot8_supported(&self) -> bool {
        self.device.supports_feature(Feature::IntegerDotProduct8)
    }

    // The Bifrost heuristics depend on M and N only; K and batch are ignored.

    fn configure_g7x_f32(
        &self,
        shape: &GemmShape,
    ) -> (LhsMatrixInfo, RhsMatrixInfo) {
        let parameters = narrow_or_wide(shape, G7X_F32_NARROW, G7X_F32_WIDE);
        configure_lhs_rhs_info(shape.m, shape.n, &parameters)
    }

    fn configure_g7x_f16(
        &self,
        shape: &GemmShape,
    ) -> (LhsMatrixInfo, RhsMatrixInfo) {
        let parameters = narrow_or_wide(shape, G7X_F16_NARROW, G7X_F16_WIDE);
        configure_lhs_rhs_info(shape.m, shape.n, &parameters)
    }

    fn configure_g7x_u8(
        &self,
        shape: &GemmShape,
    ) -> (LhsMatrixInfo, RhsMatrixInfo) {
        let parameters = if self.dot8_supported() {
            narrow_or_wide(shape, G7X_U8_DOT8_NARROW, G7X_U8_DOT8_WIDE)
        } else {
            narrow_or_wide(shape, G7X_U8_NARROW, G7X_U8_WIDE)
        };
        configure_lhs_rhs_info(shape.m, shape.n, &parameters)
    }

    fn configure_g76_f32(
        &self,
        shape: &GemmShape,
    ) -> (LhsMatrixInfo, RhsMatrixInfo) {
        let parameters = narrow_or_wide(shape, G76_F32_NARROW, G76_F32_WIDE);
        configure_lhs_rhs_info(shape.m, shape.n, &parameters)
    }

    fn configure_g76_f16(
        &self,
        shape: &GemmShape,
    ) -> (LhsMatrixInfo, RhsMatrixInfo) {
        let parameters = narrow_or_wide(shape, G76_F16_NARROW, G76_F16_WIDE);
        configure_lhs_rhs_info(shape.m, shape.n, &parameters)
    }

    fn configure_g76_u8(
        &self,
        shape: &GemmShape,
    ) -> (LhsMatrixInfo, RhsMatrixInfo) {
        let parameters = narrow_or_wide(shape, G76_U8_NARROW, G76_U8_WIDE);
        configure_lhs_rhs_info(shape.m, shape.n, &parameters)
    }
}

impl GemmKernelConfiguration for BifrostConfiguration {
    fn target(&self) -> GpuTarget {
        self.target
    }

    fn configure(
        &self,
        shape: GemmShape,
        data_type: DataType,
    ) -> Result<(LhsMatrixInfo, RhsMatrixInfo), Error> {
        let heuristic = self.heuristic(data_type).ok_or(Error::UnsupportedDataType {
            target: self.target,
            data_type,
        })?;

        let (lhs_info, rhs_info) = heuristic(self, &shape);
        tracing::debug!(
            target_gpu = %self.target,
            %data_type,
            %shape,
            ?lhs_info,
            ?rhs_info,
            "Selected reshaped GEMM configuration"
        );
        Ok((lhs_info, rhs_info))
    }
}
