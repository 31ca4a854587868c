use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::structs::{InstrumentType, Isin, Security};

use super::{InsertReport, Persistable};

/* This securities manager will handle saving the securities and loading the previous data if they exist.
A security is registered once, the first import wins. It will implement the Drop trait to save */
#[derive(Serialize, Deserialize)]
pub struct SecuritiesManager {
    pub securities: HashMap<Isin, Security>,
    #[serde(skip)]
    path: String,
    #[serde(skip)]
    persist: bool,
}

impl Persistable for SecuritiesManager {
    const FILE_NAME: &'static str = "securities";

    fn default_new(path: String, persist: bool) -> Self {
        Self {
            securities: HashMap::new(),
            path,
            persist,
        }
    }

    fn restore(&mut self, path: String, persist: bool) {
        self.path = path;
        self.persist = persist;
    }

    fn get_path(&self) -> &str {
        return &self.path;
    }

    fn is_persistent(&self) -> bool {
        self.persist
    }
}

impl SecuritiesManager {
    pub fn get(&self, isin: &str) -> Option<&Security> {
        self.securities.get(isin)
    }

    /* Instrument of a security, unknown securities are valued as plain instruments */
    pub fn instrument_type(&self, isin: &str) -> InstrumentType {
        self.get(isin)
            .map(|security| security.instrument_type.clone())
            .unwrap_or(InstrumentType::Other(String::new()))
    }

    pub fn push(&mut self, security: Security) -> bool {
        if self.securities.contains_key(&security.isin) {
            return false;
        }
        self.securities.insert(security.isin.clone(), security);
        true
    }

    pub fn extend(&mut self, securities: Vec<Security>) -> InsertReport {
        let mut report = InsertReport::default();
        for security in securities {
            report.add(self.push(security));
        }
        report
    }

    /* Every security sorted by name */
    pub fn all(&self) -> Vec<&Security> {
        let mut securities: Vec<&Security> = self.securities.values().collect();
        securities.sort_by(|a, b| a.name.cmp(&b.name).then(a.isin.cmp(&b.isin)));
        securities
    }

    /* Shares, ETFs and anything that is not a bond */
    pub fn shares(&self) -> Vec<&Security> {
        self.all().into_iter().filter(|s| !s.is_bond()).collect()
    }

    pub fn bonds(&self) -> Vec<&Security> {
        self.all().into_iter().filter(|s| s.is_bond()).collect()
    }
}

impl Drop for SecuritiesManager {
    fn drop(&mut self) {
        self.save_on_drop();
    }
}
