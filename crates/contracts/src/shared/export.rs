//! CSV encoding of table rows for the "Export" action

use crate::shared::table::{ColumnDef, TableRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer: {0}")]
    Buffer(String),
    #[error("csv output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render `rows` as `;`-separated CSV with a UTF-8 BOM (Excel friendly).
/// Only `columns` are written, in the given order.
pub fn rows_to_csv<T: TableRecord>(rows: &[T], columns: &[ColumnDef]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.label))?;
    for row in rows {
        writer.write_record(
            columns
                .iter()
                .map(|c| row.get_field_value(c.key).unwrap_or_default()),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    let mut content = String::from('\u{FEFF}');
    content.push_str(&String::from_utf8(bytes)?);
    Ok(content)
}

/// `room_types_2024-05-01.csv`
pub fn export_filename(collection: &str, today: chrono::NaiveDate) -> String {
    format!("{}_{}.csv", collection, today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_academic_year::aggregate::AcademicYear;
    use crate::domain::a001_academic_year::fixtures::academic_years;
    use crate::shared::table::find_column;

    #[test]
    fn test_header_and_rows_with_bom() {
        let rows = academic_years();
        let columns: Vec<ColumnDef> = ["id", "label", "status"]
            .iter()
            .filter_map(|k| find_column(AcademicYear::COLUMNS, k).copied())
            .collect();
        let csv = rows_to_csv(&rows[..2], &columns).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));

        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID;Academic Year;Status");
        assert!(lines[1].starts_with(&format!("{};", rows[0].id)));
    }

    #[test]
    fn test_empty_rows_rejected() {
        let rows: Vec<AcademicYear> = Vec::new();
        assert!(matches!(
            rows_to_csv(&rows, AcademicYear::COLUMNS),
            Err(ExportError::Empty)
        ));
    }

    #[test]
    fn test_export_filename() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(export_filename("room_types", day), "room_types_2024-05-01.csv");
    }
}
