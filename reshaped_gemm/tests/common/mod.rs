#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use reshaped_gemm::{DeviceFeatures, Feature};

/// Device with a fixed dot8 answer that counts how often it is asked.
pub struct FakeDevice {
    dot8: bool,
    queries: AtomicUsize,
}

impl FakeDevice {
    pub fn new(dot8: bool) -> Arc<Self> {
        Arc::new(Self {
            dot8,
            queries: AtomicUsize::new(0),
        })
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl DeviceFeatures for FakeDevice {
    fn supports_feature(
        &self,
        feature: Feature,
    ) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match feature {
            Feature::IntegerDotProduct8 => self.dot8,
        }
    }
}
