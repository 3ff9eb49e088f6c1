use std::{fs, path::Path, sync::OnceLock};

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::{
    device::{DeviceFeatures, Feature},
    gpu_target::GpuTarget,
};

/// Targets whose drivers support 8-bit dot products without advertising the extension.
const DOT8_WITHOUT_EXTENSION: [GpuTarget; 1] = [GpuTarget::G76];

/// Static description of an OpenCL device, as reported by its driver.
///
/// ```json
/// { "name": "Mali-G72 MP12", "extensions": ["cl_arm_integer_dot_product_int8"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceDescription {
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(skip)]
    dot8_supported: OnceLock<bool>,
}

impl DeviceDescription {
    pub fn new(
        name: impl Into<String>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            extensions,
            dot8_supported: OnceLock::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn target(&self) -> GpuTarget {
        GpuTarget::from_device_name(&self.name)
    }

    pub fn supports_extension(
        &self,
        extension: &str,
    ) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }
}

impl DeviceFeatures for DeviceDescription {
    fn supports_feature(
        &self,
        feature: Feature,
    ) -> bool {
        match feature {
            Feature::IntegerDotProduct8 => *self.dot8_supported.get_or_init(|| {
                let supported = self.supports_extension(feature.extension_name())
                    || DOT8_WITHOUT_EXTENSION.contains(&self.target());
                tracing::debug!(device = %self.name, supported, "Probed 8-bit dot product support");
                supported
            }),
        }
    }
}
