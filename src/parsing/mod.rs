pub mod table;
pub use table::*;

pub mod values;
pub use values::*;

pub mod movements;
pub use movements::parse_movements;

pub mod orders;
pub use orders::parse_orders;

pub mod securities;
pub use securities::parse_securities;

pub mod import;
pub use import::*;

/* Rows converted from a table, and how many could not be */
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub rejected: usize,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: 0,
        }
    }
}
