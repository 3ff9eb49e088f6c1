use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use clap::Args;
use reshaped_gemm::{DeviceDescription, GpuTarget};

#[derive(Debug, Args)]
pub struct DeviceArgs {
    /// JSON file with the device name and extensions
    #[arg(long, conflicts_with_all = ["device_name", "extensions"])]
    pub device: Option<PathBuf>,
    /// Device name as reported by the driver, e.g. "Mali-G76 MP10"
    #[arg(long)]
    pub device_name: Option<String>,
    /// Extension supported by the device, may be repeated
    #[arg(long = "extension")]
    pub extensions: Vec<String>,
    /// Use this target instead of the one parsed from the device name
    #[arg(long)]
    pub target: Option<GpuTarget>,
}

impl DeviceArgs {
    pub fn resolve(&self) -> anyhow::Result<(GpuTarget, Arc<DeviceDescription>)> {
        let description = match (&self.device, &self.device_name) {
            (Some(path), _) => DeviceDescription::from_json_file(path)
                .with_context(|| format!("Failed to load device from {}", path.display()))?,
            (None, Some(name)) => DeviceDescription::new(name.clone(), self.extensions.clone()),
            (None, None) => bail!("Either --device or --device-name is required"),
        };

        let target = self.target.unwrap_or_else(|| description.target());
        tracing::debug!(device = %description.name, %target, "Resolved device");
        Ok((target, Arc::new(description)))
    }
}
