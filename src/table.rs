use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::{PluginMetadataRecord, PLUGIN_META_HEADERS};

/// Reads target URLs from the first column, skipping the header row and
/// rows whose first column is blank.
pub fn read_urls<P: AsRef<Path>>(csv_file: P) -> Result<Vec<String>> {
    let path = csv_file.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Couldn't open URL list {}", path.display()))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("Couldn't read header of {}", path.display()))?;
    if headers.is_empty() {
        anyhow::bail!("Missing header row in URL list {}", path.display());
    }

    urls_from_reader(rdr).with_context(|| format!("Couldn't read URL list {}", path.display()))
}

pub fn urls_from_reader<R: io::Read>(mut rdr: csv::Reader<R>) -> csv::Result<Vec<String>> {
    let mut urls = vec![];
    for row in rdr.records() {
        let row = row?;
        match row.get(0) {
            Some(url) if !url.is_empty() => urls.push(url.to_string()),
            _ => (),
        }
    }
    Ok(urls)
}

pub fn write_records<P: AsRef<Path>>(records: &[PluginMetadataRecord], csv_file: P) -> Result<()> {
    let path = csv_file.as_ref();
    let wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Couldn't create {}", path.display()))?;

    records_to_writer(records, wtr).with_context(|| format!("Couldn't write {}", path.display()))
}

pub fn records_to_writer<W: io::Write>(
    records: &[PluginMetadataRecord],
    mut wtr: csv::Writer<W>,
) -> csv::Result<()> {
    wtr.write_record(PLUGIN_META_HEADERS.iter())?;
    for record in records {
        wtr.write_record(&record.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads back a table produced by [`write_records`].
pub fn read_records<P: AsRef<Path>>(csv_file: P) -> Result<Vec<PluginMetadataRecord>> {
    let path = csv_file.as_ref();
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Couldn't open {}", path.display()))?;

    let headers = rdr.headers()?;
    if headers != &*PLUGIN_META_HEADERS {
        anyhow::bail!("Unexpected headers in {}: {headers:?}", path.display());
    }

    rdr.deserialize()
        .collect::<csv::Result<Vec<_>>>()
        .with_context(|| format!("Couldn't read records from {}", path.display()))
}
