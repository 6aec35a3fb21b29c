use super::model::Cell;
use super::table::Table;
use crate::error::SpiderError;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Byte order mark, so spreadsheet software opens the CSV as UTF-8.
const BOM: &[u8] = "\u{feff}".as_bytes();

/// Longest text an XLSX cell holds, in characters.
pub const XLSX_MAX_TEXT: usize = 32_767;

/// Output file stem; the run timestamp & extension are appended.
pub const FILE_STEM: &str = "candidatos_jne";

/// Paths of the two files written by [`write`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPaths {
    pub xlsx: PathBuf,
    pub csv: PathBuf,
}

/// Write `table` to `{dir}/candidatos_jne_{stamp}.csv` and `.xlsx`, CSV first.
pub async fn write(table: &Table, dir: &Path, stamp: &str) -> Result<ExportPaths, SpiderError> {
    let time = std::time::Instant::now();

    let paths = ExportPaths {
        xlsx: dir.join(format!("{FILE_STEM}_{stamp}.xlsx")),
        csv: dir.join(format!("{FILE_STEM}_{stamp}.csv")),
    };

    crate::fs::write_file(&paths.csv, &to_csv(table)?).await?;
    crate::fs::write_file(&paths.xlsx, &to_xlsx(table)?).await?;

    debug!(
        "candidate table exported to {:?} & {:?}, {}",
        paths.xlsx,
        paths.csv,
        crate::time_elapsed(time)
    );

    Ok(paths)
}

/// Render `table` as CSV: BOM, header row, then one record per candidate.
pub fn to_csv(table: &Table) -> Result<Vec<u8>, SpiderError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(BOM.to_vec());

    writer.write_record(table.columns().iter().map(|column| column.header()))?;
    for record in table.records() {
        writer.write_record(
            record
                .into_iter()
                .map(|cell| cell.map(ToString::to_string).unwrap_or_default()),
        )?;
    }

    writer
        .into_inner()
        .map_err(|err| SpiderError::Io(err.into_error()))
}

/// Render `table` as a single-sheet XLSX workbook with a bold header row.
///
/// Numbers are written as numeric cells; missing cells are left blank. Text longer than
/// [`XLSX_MAX_TEXT`] is clipped, the CSV keeps it whole.
pub fn to_xlsx(table: &Table) -> Result<Vec<u8>, SpiderError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, column) in table.columns().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, column.header(), &header)?;
    }

    for (row, record) in table.records().enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in record.into_iter().enumerate() {
            let col = col as u16;
            match cell {
                Some(Cell::Text(text)) => {
                    sheet.write_string(row, col, clip(text, row, col))?;
                }
                Some(Cell::Int(n)) => {
                    sheet.write_number(row, col, *n as f64)?;
                }
                Some(Cell::Number(n)) => {
                    sheet.write_number(row, col, *n)?;
                }
                None => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn clip(text: &str, row: u32, col: u16) -> &str {
    match text.char_indices().nth(XLSX_MAX_TEXT) {
        Some((end, _)) => {
            warn!(
                "cell ({row}, {col}) has {} characters, clipped to {XLSX_MAX_TEXT} in the XLSX",
                text.chars().count()
            );
            &text[..end]
        }
        None => text,
    }
}
