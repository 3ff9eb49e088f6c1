use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

static MALI_DEVICE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bMali-([TG]\d+(?:BIG|LIT)?)\b").expect("valid Mali device name pattern"));

/// GPU microarchitecture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuArchitecture {
    Unknown,
    Midgard,
    Bifrost,
    Valhall,
}

/// Individual GPU model a kernel configuration is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GpuTarget {
    Unknown,
    T600,
    T700,
    T800,
    G71,
    G72,
    G51,
    G51Big,
    G51Lit,
    G52,
    G52Lit,
    G76,
    G77,
}

impl GpuTarget {
    pub const ALL: [GpuTarget; 13] = [
        GpuTarget::Unknown,
        GpuTarget::T600,
        GpuTarget::T700,
        GpuTarget::T800,
        GpuTarget::G71,
        GpuTarget::G72,
        GpuTarget::G51,
        GpuTarget::G51Big,
        GpuTarget::G51Lit,
        GpuTarget::G52,
        GpuTarget::G52Lit,
        GpuTarget::G76,
        GpuTarget::G77,
    ];

    pub fn architecture(&self) -> GpuArchitecture {
        match self {
            GpuTarget::Unknown => GpuArchitecture::Unknown,
            GpuTarget::T600 | GpuTarget::T700 | GpuTarget::T800 => GpuArchitecture::Midgard,
            GpuTarget::G71
            | GpuTarget::G72
            | GpuTarget::G51
            | GpuTarget::G51Big
            | GpuTarget::G51Lit
            | GpuTarget::G52
            | GpuTarget::G52Lit
            | GpuTarget::G76 => GpuArchitecture::Bifrost,
            GpuTarget::G77 => GpuArchitecture::Valhall,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GpuTarget::Unknown => "UNKNOWN",
            GpuTarget::T600 => "T600",
            GpuTarget::T700 => "T700",
            GpuTarget::T800 => "T800",
            GpuTarget::G71 => "G71",
            GpuTarget::G72 => "G72",
            GpuTarget::G51 => "G51",
            GpuTarget::G51Big => "G51BIG",
            GpuTarget::G51Lit => "G51LIT",
            GpuTarget::G52 => "G52",
            GpuTarget::G52Lit => "G52LIT",
            GpuTarget::G76 => "G76",
            GpuTarget::G77 => "G77",
        }
    }

    /// Resolves a device name such as `Mali-G76 MP10` to its target.
    ///
    /// Names that are not Mali devices resolve to [`GpuTarget::Unknown`].
    pub fn from_device_name(device_name: &str) -> Self {
        let Some(captures) = MALI_DEVICE_NAME.captures(device_name) else {
            return GpuTarget::Unknown;
        };

        let model = &captures[1];
        match model.parse::<GpuTarget>() {
            Ok(target) => target,
            Err(_) => {
                tracing::warn!(device_name, model, "Unrecognized Mali GPU model, target set to UNKNOWN");
                GpuTarget::Unknown
            },
        }
    }
}

impl fmt::Display for GpuTarget {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GpuTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uppercased = s.to_ascii_uppercase();
        GpuTarget::ALL
            .into_iter()
            .find(|target| target.name() == uppercased)
            .ok_or_else(|| format!("Unknown GPU target: {s}"))
    }
}

impl From<GpuTarget> for String {
    fn from(target: GpuTarget) -> Self {
        target.name().to_string()
    }
}

impl TryFrom<String> for GpuTarget {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
