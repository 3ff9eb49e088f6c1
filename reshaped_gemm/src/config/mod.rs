mod device_description;
mod error;

pub use device_description::DeviceDescription;
pub use error::ConfigError;
