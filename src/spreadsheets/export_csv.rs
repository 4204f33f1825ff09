use crate::domain::ListingRecord;
use crate::errors::ExportError;

/// CSV with a [`ListingRecord::FIELD_NAMES`] header. Absent values are empty
/// cells; descriptions with commas or newlines are quoted.
pub fn export_listings_csv(listings: &[ListingRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(ListingRecord::FIELD_NAMES)?;
    for listing in listings {
        writer.write_record(listing.cells().iter().map(|cell| cell.to_string()))?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    tracing::debug!(rows = listings.len(), bytes = buffer.len(), "built csv export");

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Financial;

    #[test]
    fn header_then_rows_with_empty_absent_values() {
        let listing = ListingRecord {
            title: Some("Dry Cleaner, Downtown".into()),
            asking_price: Some(Financial::Numeric(450_000)),
            price_revenue_multiple: Some(1.5),
            business_description: Some("Line one\nLine two".into()),
            ..Default::default()
        };

        let out = String::from_utf8(export_listings_csv(&[listing]).unwrap()).unwrap();
        let mut lines = out.lines();

        assert_eq!(lines.next().unwrap(), ListingRecord::FIELD_NAMES.join(","));
        assert!(out.contains("\"Dry Cleaner, Downtown\",,450000,,,,,No,"));
        assert!(out.contains(",1.5,,,,\"Line one\nLine two\""));
    }
}
