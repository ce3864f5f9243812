use crate::domain::model::CellValue;

/// Formats every value of a cell and joins list cells with `separator`.
///
/// Items the formatter skips (returns `None` for) are left out.
pub fn format_cell<T, F>(cell: &CellValue<T>, separator: &str, mut formatter: F) -> Option<String>
where
    F: FnMut(&T) -> Option<String>,
{
    match cell {
        CellValue::Single(value) => formatter(value),
        CellValue::Multiple(values) => {
            let parts: Vec<String> = values.iter().filter_map(&mut formatter).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(separator))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::binary_prefix;

    #[test]
    fn test_single_and_multiple() {
        let single = CellValue::Single(1024.0);
        assert_eq!(
            format_cell(&single, ", ", |v| Some(binary_prefix::format(*v))),
            Some("1 KiB".to_string())
        );

        let multiple = CellValue::Multiple(vec![1024.0, 2048.0]);
        assert_eq!(
            format_cell(&multiple, " / ", |v| Some(binary_prefix::format(*v))),
            Some("1 KiB / 2 KiB".to_string())
        );
    }

    #[test]
    fn test_skipped_items() {
        let cell = CellValue::Multiple(vec![0.0, 0.0]);
        let formatted = format_cell(&cell, ", ", |v| (*v != 0.0).then(|| v.to_string()));
        assert_eq!(formatted, None);
    }

    #[test]
    fn test_from_vec_collapses_single_value() {
        assert_eq!(CellValue::from_vec(vec![1]), CellValue::Single(1));
        assert_eq!(CellValue::from_vec(vec![1, 2]), CellValue::Multiple(vec![1, 2]));
        assert!(CellValue::<u8>::from_vec(vec![]).is_empty());
    }
}
