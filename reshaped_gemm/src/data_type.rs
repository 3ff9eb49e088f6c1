use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    // Floating point
    BF16,
    F16,
    F32,
    // Quantized
    QASYMM8,
    QASYMM8Signed,
    QSYMM8,
    // Normal integers
    I8,
    U8,
    I32,
    U32,
}

impl DataType {
    pub const ALL: [DataType; 10] = [
        DataType::BF16,
        DataType::F16,
        DataType::F32,
        DataType::QASYMM8,
        DataType::QASYMM8Signed,
        DataType::QSYMM8,
        DataType::I8,
        DataType::U8,
        DataType::I32,
        DataType::U32,
    ];

    pub const fn size_in_bits(&self) -> usize {
        match self {
            DataType::BF16 => 16,
            DataType::F16 => 16,
            DataType::F32 => 32,
            DataType::QASYMM8 => 8,
            DataType::QASYMM8Signed => 8,
            DataType::QSYMM8 => 8,
            DataType::I8 => 8,
            DataType::U8 => 8,
            DataType::I32 => 32,
            DataType::U32 => 32,
        }
    }

    pub const fn size_in_bytes(&self) -> usize {
        self.size_in_bits().div_ceil(8)
    }

    pub const fn is_quantized(&self) -> bool {
        matches!(self, DataType::QASYMM8 | DataType::QASYMM8Signed | DataType::QSYMM8)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::BF16 => "bf16",
            DataType::F16 => "f16",
            DataType::F32 => "f32",
            DataType::QASYMM8 => "qasymm8",
            DataType::QASYMM8Signed => "qasymm8signed",
            DataType::QSYMM8 => "qsymm8",
            DataType::I8 => "i8",
            DataType::U8 => "u8",
            DataType::I32 => "i32",
            DataType::U32 => "u32",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.name() == lowered)
            .ok_or_else(|| format!("Unknown data type: {s}"))
    }
}
