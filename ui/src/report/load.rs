//! Spreadsheet decoding: workbook bytes to a [`Dataset`].

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use thiserror::Error;

use super::columns::ColumnMap;
use super::dataset::Dataset;
use super::event::AlarmEvent;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read the workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("the workbook has no worksheet")]
    NoWorksheet,
    #[error("required column `{0}` not found")]
    MissingColumn(String),
    #[error("no valid rows ({discarded} rows discarded)")]
    NoValidRows { discarded: usize },
}

/// Decode `bytes` with the default column headers.
pub fn load(bytes: &[u8]) -> Result<Dataset, LoadError> {
    load_with(bytes, &ColumnMap::default())
}

/// Decode `bytes` (xlsx, xls, xlsb or ods) and build the dataset from the first worksheet.
pub fn load_with(bytes: &[u8], columns: &ColumnMap) -> Result<Dataset, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)??;
    dataset_from_range(&range, columns)
}

/// Build the dataset from an already decoded sheet. The first row is the header.
pub fn dataset_from_range(range: &Range<Data>, columns: &ColumnMap) -> Result<Dataset, LoadError> {
    let mut rows = range.rows();
    let header = rows.next().unwrap_or_default();

    let center_idx = column_index(header, &columns.center);
    let ticket_idx = required_column(header, &columns.ticket)?;
    let alarm_idx = required_column(header, &columns.alarm_time)?;
    let normalization_idx = required_column(header, &columns.normalization_time)?;

    if center_idx.is_none() {
        tracing::warn!(column = %columns.center, "center column not found; loading without centers");
    }

    let events = rows.map(|row| {
        AlarmEvent::from_cells(
            center_idx.and_then(|idx| row.get(idx)),
            row.get(ticket_idx),
            row.get(alarm_idx),
            row.get(normalization_idx),
        )
    });

    let dataset = Dataset::from_events(events, center_idx.is_some());
    if dataset.is_empty() {
        return Err(LoadError::NoValidRows {
            discarded: dataset.discarded(),
        });
    }

    tracing::info!(
        rows = dataset.len(),
        discarded = dataset.discarded(),
        "alarm sheet loaded"
    );
    Ok(dataset)
}

fn column_index(header: &[Data], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| cell.to_string().trim() == name.trim())
}

fn required_column(header: &[Data], name: &str) -> Result<usize, LoadError> {
    column_index(header, name).ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[&[&str]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height.saturating_sub(1), width.saturating_sub(1)));
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String(value.to_string()));
                }
            }
        }
        range
    }

    const HEADER: &[&str] = &[
        "CENTRO",
        "RAL/INC CADASTRADOS",
        "HORÁRIO ALARME",
        "HORÁRIO NORMALIZAÇÃO",
    ];

    #[test]
    fn drops_negative_recovery_rows() {
        let range = sheet(&[
            HEADER,
            &["A", "123", "01/01/2024 10:00:00", "01/01/2024 10:07:00"],
            &["A", "", "01/01/2024 11:00", "01/01/2024 10:50"],
        ]);

        let dataset = dataset_from_range(&range, &ColumnMap::default()).expect("one valid row");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.discarded(), 1);
        assert_eq!(dataset.events()[0].recovery_minutes, 7.0);
        assert_eq!(dataset.events()[0].center.as_deref(), Some("A"));
    }

    #[test]
    fn columns_are_found_by_name_in_any_order() {
        let range = sheet(&[
            &["EXTRA", " HORÁRIO NORMALIZAÇÃO ", "HORÁRIO ALARME", "RAL/INC CADASTRADOS"],
            &["x", "02/01/2024 08:20", "02/01/2024 08:00", "RAL 9"],
        ]);

        let dataset = dataset_from_range(&range, &ColumnMap::default()).expect("valid row");
        assert!(!dataset.has_center_column());
        assert_eq!(dataset.events()[0].recovery_minutes, 20.0);
        assert_eq!(dataset.events()[0].center, None);
        assert_eq!(dataset.events()[0].ticket_id, "RAL 9");
    }

    #[test]
    fn missing_required_column_is_reported() {
        let range = sheet(&[
            &["CENTRO", "HORÁRIO ALARME", "HORÁRIO NORMALIZAÇÃO"],
            &["A", "01/01/2024 10:00", "01/01/2024 10:05"],
        ]);

        match dataset_from_range(&range, &ColumnMap::default()) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "RAL/INC CADASTRADOS"),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn all_rows_invalid_is_an_error() {
        let range = sheet(&[
            HEADER,
            &["A", "1", "bad", "01/01/2024 10:05"],
            &["B", "2", "01/01/2024 10:05", "01/01/2024 10:00"],
        ]);

        match dataset_from_range(&range, &ColumnMap::default()) {
            Err(LoadError::NoValidRows { discarded }) => assert_eq!(discarded, 2),
            other => panic!("expected no valid rows, got {other:?}"),
        }
    }

    #[test]
    fn header_only_sheet_has_no_rows() {
        let range = sheet(&[HEADER]);
        assert!(matches!(
            dataset_from_range(&range, &ColumnMap::default()),
            Err(LoadError::NoValidRows { discarded: 0 })
        ));
    }

    #[test]
    fn custom_headers_are_honoured() {
        let columns = ColumnMap {
            center: "Site".into(),
            ticket: "Ticket".into(),
            alarm_time: "Raised".into(),
            normalization_time: "Cleared".into(),
        };
        let range = sheet(&[
            &["Site", "Ticket", "Raised", "Cleared"],
            &["North", "", "05/02/2024 09:00", "05/02/2024 09:30"],
        ]);

        let dataset = dataset_from_range(&range, &columns).expect("valid row");
        assert_eq!(dataset.centers(), vec!["North".to_string()]);
    }

    #[test]
    fn garbage_bytes_are_a_workbook_error() {
        assert!(matches!(
            load(b"definitely not a spreadsheet"),
            Err(LoadError::Workbook(_))
        ));
    }
}
