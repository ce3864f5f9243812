use serde::{Deserialize, Serialize};

/// Naming scheme of a switch port, see [`crate::core::port::classify`].
///
/// The variant order is the group order of sorted port columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortKind {
    /// `12`
    Numeric,
    /// `A1`, `c22`
    Alphanumeric,
    /// `1/0/24`
    Slash,
    Unclassified,
}

/// Which comparator a port-sorted column uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortOrdering {
    #[default]
    Plain,
    /// Strips the `?? (...)` wrapper of patch port names before comparing.
    Patch,
}

/// Magnitude base used by human readable byte sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixSystem {
    /// Powers of 1024: KiB, MiB, ...
    #[default]
    Binary,
    /// Powers of 1000: kB, MB, ...
    Si,
}

impl PrefixSystem {
    pub fn threshold(self) -> f64 {
        match self {
            PrefixSystem::Binary => 1024.0,
            PrefixSystem::Si => 1000.0,
        }
    }

    pub fn units(self) -> &'static [&'static str; 8] {
        match self {
            PrefixSystem::Binary => &["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"],
            PrefixSystem::Si => &["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"],
        }
    }
}

/// A table cell holding either one value or a list of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue<T> {
    Single(T),
    Multiple(Vec<T>),
}

impl<T> CellValue<T> {
    pub fn from_vec(mut values: Vec<T>) -> Self {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return CellValue::Single(value);
            }
        }
        CellValue::Multiple(values)
    }

    pub fn len(&self) -> usize {
        match self {
            CellValue::Single(_) => 1,
            CellValue::Multiple(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A tick position together with its rendered axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub value: f64,
    pub label: String,
}
