use comfy_table::{ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use reshaped_gemm::{DataType, GemmKernelConfiguration, GemmShape, NARROW_N, ReshapedKernelConfiguration};

use super::{
    DeviceArgs,
    configure::{format_lhs, format_rhs},
};

/// Output widths on either side of the narrow tiling threshold.
const WIDTHS: [u32; 2] = [NARROW_N, NARROW_N + 1];

pub fn handle_table(
    device: &DeviceArgs,
    m: u32,
) -> anyhow::Result<()> {
    let (target, description) = device.resolve()?;
    let configuration = ReshapedKernelConfiguration::new(target, description)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Data type", "N", "LHS", "RHS"]);

    for data_type in DataType::ALL {
        for n in WIDTHS {
            match configuration.configure(GemmShape::new(m, n, 1, 1), data_type) {
                Ok((lhs, rhs)) => {
                    table.add_row(vec![data_type.to_string(), n.to_string(), format_lhs(&lhs), format_rhs(&rhs)]);
                },
                Err(error) => {
                    table.add_row(vec![data_type.to_string(), n.to_string(), error.to_string(), String::new()]);
                    break;
                },
            }
        }
    }

    println!("Target: {target}, M = {m}");
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reshaped_gemm::{DeviceDescription, GpuTarget};

    use super::*;

    #[test]
    fn test_widths_straddle_narrow_threshold() {
        let device = Arc::new(DeviceDescription::new("Mali-G71", Vec::new()));
        let configuration = ReshapedKernelConfiguration::new(GpuTarget::G71, device).unwrap();
        let [narrow, wide] =
            WIDTHS.map(|n| configuration.configure(GemmShape::new(256, n, 1, 1), DataType::F32).unwrap());
        assert_eq!((narrow.0.m0, narrow.1.n0), (4, 2));
        assert_eq!((wide.0.m0, wide.1.n0), (5, 4));
    }
}
