mod features;

pub use features::{DeviceFeatures, Feature};
