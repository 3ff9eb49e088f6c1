use console::Style;
use reshaped_gemm::{DataType, GemmKernelConfiguration, GemmShape, LhsMatrixInfo, ReshapedKernelConfiguration, RhsMatrixInfo};

use super::DeviceArgs;

pub(crate) fn format_lhs(lhs: &LhsMatrixInfo) -> String {
    format!(
        "m0={} k0={} v0={} interleave={} transpose={}",
        lhs.m0, lhs.k0, lhs.v0, lhs.interleave, lhs.transpose
    )
}

pub(crate) fn format_rhs(rhs: &RhsMatrixInfo) -> String {
    format!(
        "n0={} k0={} h0={} interleave={} transpose={} export_to_image={}",
        rhs.n0, rhs.k0, rhs.h0, rhs.interleave, rhs.transpose, rhs.export_to_image
    )
}

pub fn handle_configure(
    device: &DeviceArgs,
    shape: GemmShape,
    data_type: DataType,
    json: bool,
) -> anyhow::Result<()> {
    let (target, description) = device.resolve()?;
    let configuration = ReshapedKernelConfiguration::new(target, description)?;
    let (lhs, rhs) = configuration.configure(shape, data_type)?;

    if json {
        let output = serde_json::json!({
            "target": target,
            "data_type": data_type,
            "shape": shape,
            "lhs": lhs,
            "rhs": rhs,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let style_header = Style::new().bold();
    println!("{}", style_header.apply_to(format!("{target} {data_type} {shape}")));
    println!("LHS: {}", format_lhs(&lhs));
    println!("RHS: {}", format_rhs(&rhs));
    Ok(())
}
