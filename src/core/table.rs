//! Sorting of table rows by a switch port column.

use crate::core::port::{compare_patch_port_sort, sort_order};
use crate::domain::model::PortOrdering;
use crate::utils::error::{DisplayError, Result};
use std::cmp::Ordering;
use std::io::{Read, Write};

impl PortOrdering {
    /// Total order used by the sorts below, see [`sort_order`].
    pub fn sort_cmp(self, a: Option<&str>, b: Option<&str>) -> Ordering {
        match self {
            PortOrdering::Plain => sort_order(a, b),
            PortOrdering::Patch => compare_patch_port_sort(a, b),
        }
    }
}

/// Sorts port names in place, grouped by naming scheme when a column mixes
/// schemes. Equal names keep their relative order.
pub fn sort_ports<S: AsRef<str>>(names: &mut [S], ordering: PortOrdering) {
    names.sort_by(|a, b| ordering.sort_cmp(Some(a.as_ref()), Some(b.as_ref())));
}

fn non_empty(cell: Option<&str>) -> Option<&str> {
    cell.filter(|value| !value.is_empty())
}

/// Reads a CSV table with a header row, sorts its rows by `column` and writes
/// the result. Empty cells sort like missing port names.
///
/// Returns the number of data rows written.
pub fn sort_csv_by_port<R: Read, W: Write>(
    reader: R,
    writer: W,
    column: &str,
    ordering: PortOrdering,
) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| DisplayError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let mut rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    tracing::debug!("Sorting {} rows by column '{}' ({:?})", rows.len(), column, ordering);

    rows.sort_by(|a, b| ordering.sort_cmp(non_empty(a.get(index)), non_empty(b.get(index))));

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&headers)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(rows.len())
}
