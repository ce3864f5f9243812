pub mod binary_prefix;
pub mod byte_size;
pub mod cell;
pub mod number;
pub mod port;
pub mod scale;
pub mod table;
pub mod ticks;
pub mod time_format;

pub use crate::domain::model::{CellValue, PortKind, PortOrdering, PrefixSystem, TickLabel};
pub use crate::domain::ports::Scale;
pub use crate::utils::error::Result;
