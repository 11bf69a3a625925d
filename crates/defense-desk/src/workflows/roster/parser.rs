use super::RosterError;
use std::io::Read;

/// Reads the non-blank cells of `column` in row order.
pub(crate) fn parse_column<R: Read>(reader: R, column: &str) -> Result<Vec<String>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let index = csv_reader
        .headers()?
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}').trim() == column)
        .ok_or_else(|| RosterError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut names = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if let Some(cell) = record.get(index).map(str::trim) {
            if !cell.is_empty() {
                names.push(cell.to_string());
            }
        }
    }

    Ok(names)
}
