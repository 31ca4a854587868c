use log::info;

use crate::{
    errors::ParsingError,
    structs::{InsertReport, Storage},
    utils::file_name,
};

use super::{parse_movements, parse_orders, parse_securities, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Movements,
    Orders,
    Securities,
}

impl FileKind {
    /* The kind of export is recognized by the beginning of the file name */
    pub fn detect(file_name: &str) -> Option<FileKind> {
        const PREFIXES: [(&str, FileKind); 6] = [
            ("movements", FileKind::Movements),
            ("movimenti", FileKind::Movements),
            ("Lista Titoli", FileKind::Orders),
            ("ordini", FileKind::Orders),
            ("portafoglio", FileKind::Securities),
            ("titoli", FileKind::Securities),
        ];
        PREFIXES
            .iter()
            .find(|(prefix, _)| file_name.starts_with(prefix))
            .map(|(_, kind)| *kind)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileKind::Movements => "movements",
            FileKind::Orders => "orders",
            FileKind::Securities => "securities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub kind: FileKind,
    pub inserted: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

impl ImportReport {
    fn new(kind: FileKind, insert: InsertReport, rejected: usize) -> Self {
        Self {
            kind,
            inserted: insert.inserted,
            duplicates: insert.duplicates,
            rejected,
        }
    }
}

/* Read an export and merge its rows in the matching manager */
pub fn import_file(
    path: &str,
    delimiter: u8,
    storage: &mut Storage,
) -> Result<ImportReport, ParsingError> {
    let name = file_name(path);
    let kind = FileKind::detect(name).ok_or_else(|| ParsingError::UnknownFileKind(name.to_string()))?;
    let table = Table::from_path(path, delimiter)?;
    let report = import_table(kind, &table, storage)?;
    info!(
        "Imported {name} as {}: {} inserted, {} already present, {} rejected",
        kind.name(),
        report.inserted,
        report.duplicates,
        report.rejected
    );
    Ok(report)
}

pub fn import_table(
    kind: FileKind,
    table: &Table,
    storage: &mut Storage,
) -> Result<ImportReport, ParsingError> {
    let report = match kind {
        FileKind::Movements => {
            let parsed = parse_movements(table)?;
            ImportReport::new(kind, storage.movements.extend(parsed.records), parsed.rejected)
        }
        FileKind::Orders => {
            let parsed = parse_orders(table)?;
            ImportReport::new(kind, storage.orders.extend(parsed.records), parsed.rejected)
        }
        FileKind::Securities => {
            let parsed = parse_securities(table)?;
            ImportReport::new(kind, storage.securities.extend(parsed.records), parsed.rejected)
        }
    };
    Ok(report)
}
