pub mod model;
pub mod ports;

pub use model::{CellValue, PortKind, PortOrdering, PrefixSystem, TickLabel};
pub use ports::Scale;
