//! CSV export of flattened member records.
//!
//! The header is the first-seen union of keys across all records. Records
//! missing a column get a blank cell.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::errors::ExportError;
use crate::flatten::FlatRecord;

const SEPARATOR: char = ',';

/// Union of keys over `records`, in first-seen order.
#[must_use]
pub fn column_union(records: &[FlatRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Write `records` as CSV to `writer`. Nothing is written for an empty slice.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the writer fails.
pub fn write_csv<W: Write>(mut writer: W, records: &[FlatRecord]) -> Result<(), ExportError> {
    if records.is_empty() {
        return Ok(());
    }

    let columns = column_union(records);
    write_row(&mut writer, columns.iter().map(String::as_str))?;

    for record in records {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| record.get(column).map(render_cell).unwrap_or_default())
            .collect();
        write_row(&mut writer, cells.iter().map(String::as_str))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write `records` to `path`, replacing any existing file.
///
/// Returns the number of records exported.
///
/// # Errors
///
/// Returns [`ExportError::Write`] if the file cannot be created or written.
pub fn export_csv(path: &Path, records: &[FlatRecord]) -> Result<usize, ExportError> {
    let wrap = |source: std::io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    match write_csv(BufWriter::new(file), records) {
        Ok(()) => {}
        Err(ExportError::Io(source)) => return Err(wrap(source)),
        Err(other) => return Err(other),
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "csv export written");
    Ok(records.len())
}

/// Text form of one leaf value.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<'a, W, I>(w: &mut W, cells: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    let mut first = true;
    for cell in cells {
        if first {
            first = false;
        } else {
            write!(w, "{SEPARATOR}")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> FlatRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn to_string(records: &[FlatRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn union_is_first_seen_order() {
        let records = vec![
            record(json!({"user.nick": "A", "stats.games": 1})),
            record(json!({"user.nick": "B", "membership.role": "admin", "stats.games": 2})),
        ];
        assert_eq!(
            column_union(&records),
            vec!["user.nick", "stats.games", "membership.role"]
        );
    }

    #[test]
    fn missing_columns_are_blank() {
        let records = vec![
            record(json!({"user.nick": "A", "stats.games": 1})),
            record(json!({"user.nick": "B"})),
        ];
        assert_eq!(to_string(&records), "user.nick,stats.games\nA,1\nB,\n");
    }

    #[test]
    fn cells_render_by_value_kind() {
        let records = vec![record(json!({
            "s": "text",
            "n": 12.5,
            "b": false,
            "z": null,
            "l": [1, 2]
        }))];
        assert_eq!(to_string(&records), "s,n,b,z,l\ntext,12.5,false,,\"[1,2]\"\n");
    }

    #[test]
    fn quotes_fields_with_separators_and_quotes() {
        let records = vec![record(json!({"nick": "a,b", "bio": "say \"hi\"", "x": "line\nbreak"}))];
        assert_eq!(
            to_string(&records),
            "nick,bio,x\n\"a,b\",\"say \"\"hi\"\"\",\"line\nbreak\"\n"
        );
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(to_string(&[]), "");
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.csv");
        std::fs::write(&path, "stale contents that should disappear\n").unwrap();

        let records = vec![record(json!({"user.nick": "A"}))];
        let count = export_csv(&path, &records).unwrap();

        assert_eq!(count, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "user.nick\nA\n");
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("members.csv");

        let err = export_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
