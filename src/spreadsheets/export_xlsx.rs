use crate::domain::{Cell, ListingRecord};
use crate::errors::ExportError;
use rust_xlsxwriter::{Workbook, Worksheet};

/// Sheet contents in write order: the header row from
/// [`ListingRecord::FIELD_NAMES`], then one row per listing.
pub fn sheet_rows(listings: &[ListingRecord]) -> Vec<Vec<Cell>> {
    let header = ListingRecord::FIELD_NAMES
        .iter()
        .map(|name| Cell::Text(name.to_string()))
        .collect();

    std::iter::once(header)
        .chain(listings.iter().map(|listing| listing.cells().to_vec()))
        .collect()
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<(), ExportError> {
    match cell {
        Cell::Empty => return Ok(()),
        Cell::Text(s) => worksheet.write_string(row, col, s)?,
        Cell::Integer(n) => worksheet.write_number(row, col, *n as f64)?,
        Cell::Decimal(v) => worksheet.write_number(row, col, *v)?,
    };
    Ok(())
}

/// Builds a single-sheet workbook from [`sheet_rows`].
pub fn export_listings_xlsx(listings: &[ListingRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, row) in sheet_rows(listings).iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            write_cell(worksheet, r as u32, c as u16, cell)?;
        }
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(rows = listings.len(), bytes = buffer.len(), "built xlsx export");

    Ok(buffer)
}
