mod common;

use std::{sync::Arc, thread};

use common::FakeDevice;
use reshaped_gemm::{
    DataType, Error, GemmKernelConfiguration, GemmShape, GpuTarget, LhsMatrixInfo, ReshapedKernelConfiguration,
    RhsMatrixInfo,
    gemm::{ReshapeParameters, configure_lhs_rhs_info},
};

const SUPPORTED_DATA_TYPES: [DataType; 3] = [DataType::F32, DataType::F16, DataType::QASYMM8];

fn configuration(
    target: GpuTarget,
    dot8: bool,
) -> ReshapedKernelConfiguration {
    ReshapedKernelConfiguration::new(target, FakeDevice::new(dot8)).unwrap()
}

fn select(
    target: GpuTarget,
    dot8: bool,
    m: u32,
    n: u32,
    data_type: DataType,
) -> (LhsMatrixInfo, RhsMatrixInfo) {
    configuration(target, dot8).configure(GemmShape::new(m, n, 128, 1), data_type).unwrap()
}

#[test]
fn test_g7x_f32_narrow_scenario() {
    let (lhs, rhs) = select(GpuTarget::G71, false, 32, 4, DataType::F32);
    assert_eq!(
        lhs,
        LhsMatrixInfo {
            m0: 4,
            k0: 8,
            v0: 1,
            transpose: false,
            interleave: true,
        }
    );
    assert_eq!(
        rhs,
        RhsMatrixInfo {
            n0: 2,
            k0: 8,
            h0: 1,
            transpose: true,
            interleave: false,
            export_to_image: false,
        }
    );
}

#[test]
fn test_g7x_f32_wide_scenario() {
    let expected = configure_lhs_rhs_info(32, 8, &ReshapeParameters::new(5, 4, 4, 2, 16, false, true, false, true));
    assert_eq!(select(GpuTarget::G71, false, 32, 8, DataType::F32), expected);

    let (lhs, rhs) = expected;
    // 32 / (5 * 2) == 3 keeps v0, 8 / (4 * 16) == 0 collapses h0
    assert_eq!(lhs.v0, 2);
    assert_eq!(rhs.h0, 1);
}

#[test]
fn test_g76_u8_wide_scenario_without_dot8() {
    let expected = configure_lhs_rhs_info(16, 16, &ReshapeParameters::new(4, 4, 16, 2, 2, false, true, false, true));
    assert_eq!(select(GpuTarget::G76, false, 16, 16, DataType::QASYMM8), expected);
}

/// Everything but `h0`, which also collapses with `n` inside a branch.
fn branch_key(
    (lhs, rhs): (LhsMatrixInfo, RhsMatrixInfo),
) -> (LhsMatrixInfo, u32, u32, bool, bool) {
    (lhs, rhs.n0, rhs.k0, rhs.transpose, rhs.interleave)
}

#[test]
fn test_n_threshold_is_exact() {
    for target in [GpuTarget::G71, GpuTarget::G76] {
        for data_type in SUPPORTED_DATA_TYPES {
            for dot8 in [true, false] {
                let at = |n| branch_key(select(target, dot8, 64, n, data_type));

                assert_eq!(at(3), at(4), "{target} {data_type} dot8={dot8}");
                assert_eq!(at(5), at(6), "{target} {data_type} dot8={dot8}");
                assert_ne!(at(4), at(5), "{target} {data_type} dot8={dot8}");
            }
        }
    }
}

#[test]
fn test_g7x_u8_depends_on_dot8() {
    for n in [1, 4, 5, 64] {
        assert_ne!(
            select(GpuTarget::G72, true, 64, n, DataType::QASYMM8),
            select(GpuTarget::G72, false, 64, n, DataType::QASYMM8)
        );
    }
}

#[test]
fn test_dot8_queried_for_g7x_u8_only() {
    let device = FakeDevice::new(true);
    let configuration = ReshapedKernelConfiguration::new(GpuTarget::G51, device.clone()).unwrap();

    configuration.configure(GemmShape::new(64, 64, 64, 1), DataType::F32).unwrap();
    configuration.configure(GemmShape::new(64, 64, 64, 1), DataType::F16).unwrap();
    assert_eq!(device.queries(), 0);

    configuration.configure(GemmShape::new(64, 64, 64, 1), DataType::QASYMM8).unwrap();
    assert_eq!(device.queries(), 1);
}

#[test]
fn test_configure_is_pure() {
    for target in [GpuTarget::T800, GpuTarget::G52Lit, GpuTarget::G76] {
        let configuration = configuration(target, true);
        for data_type in SUPPORTED_DATA_TYPES {
            for (m, n) in [(0, 0), (1, 1), (32, 4), (1000, 17)] {
                let shape = GemmShape::new(m, n, 256, 2);
                assert_eq!(
                    configuration.configure(shape, data_type).unwrap(),
                    configuration.configure(shape, data_type).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_non_g76_targets_share_g7x_table() {
    let reference: Vec<_> = SUPPORTED_DATA_TYPES.iter().map(|&dt| select(GpuTarget::G71, false, 128, 128, dt)).collect();
    for target in [
        GpuTarget::T600,
        GpuTarget::T700,
        GpuTarget::G72,
        GpuTarget::G51,
        GpuTarget::G51Big,
        GpuTarget::G51Lit,
        GpuTarget::G52,
        GpuTarget::G52Lit,
    ] {
        let selected: Vec<_> = SUPPORTED_DATA_TYPES.iter().map(|&dt| select(target, false, 128, 128, dt)).collect();
        assert_eq!(selected, reference, "{target}");
    }
    assert_ne!(select(GpuTarget::G76, false, 128, 128, DataType::F32), reference[0]);
}

#[test]
fn test_unsupported_data_types_fail() {
    for target in [GpuTarget::G71, GpuTarget::G76] {
        let configuration = configuration(target, true);
        for data_type in DataType::ALL.into_iter().filter(|dt| !SUPPORTED_DATA_TYPES.contains(dt)) {
            assert_eq!(
                configuration.configure(GemmShape::new(64, 64, 64, 1), data_type),
                Err(Error::UnsupportedDataType {
                    target,
                    data_type,
                })
            );
        }
    }
}

#[test]
fn test_concurrent_configure() {
    let configuration = Arc::new(configuration(GpuTarget::G72, true));
    let expected = configuration.configure(GemmShape::new(256, 256, 256, 1), DataType::QASYMM8).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let configuration = Arc::clone(&configuration);
            thread::spawn(move || configuration.configure(GemmShape::new(256, 256, 256, 1), DataType::QASYMM8).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
