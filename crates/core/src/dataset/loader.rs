use crate::dataset::error::DataLoadError;
use crate::dataset::CompanyIndex;
use crate::domain::company::CompanyRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "company_name",
    "annual_return",
    "volatility",
    "beta",
    "pe_ratio",
    "dividend_yield",
    "current_price",
];

pub fn load_csv_path(path: impl AsRef<Path>) -> Result<CompanyIndex, DataLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let index = load_csv_reader(file)?;
    tracing::info!(path = %path.display(), companies = index.len(), "loaded company dataset");
    Ok(index)
}

pub fn load_csv_reader<R: Read>(reader: R) -> Result<CompanyIndex, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record: CompanyRecord = row.deserialize(Some(&headers))?;
        record
            .validate()
            .map_err(|reason| DataLoadError::InvalidRecord {
                line,
                company: record.company_name.clone(),
                reason,
            })?;
        records.push(record);
    }

    CompanyIndex::from_validated(records)
}
