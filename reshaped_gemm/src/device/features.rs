/// Device capabilities that kernel configuration heuristics may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Fused 8-bit integer dot product instructions (`cl_arm_integer_dot_product_int8`).
    IntegerDotProduct8,
}

impl Feature {
    /// OpenCL extension that advertises the feature.
    pub fn extension_name(&self) -> &'static str {
        match self {
            Feature::IntegerDotProduct8 => "cl_arm_integer_dot_product_int8",
        }
    }
}

/// Capability query for the device a kernel will run on.
///
/// Implementations may probe lazily but must answer the same way for the
/// lifetime of the value.
pub trait DeviceFeatures: Send + Sync {
    /// Checks if the device supports a specific feature.
    fn supports_feature(
        &self,
        feature: Feature,
    ) -> bool;
}
