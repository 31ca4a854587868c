use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::structs::{DateRange, Movement, MovementCategory, RecordId};

use super::{InsertReport, Persistable};

/* Same as the orders manager for the movements of the current account */
#[derive(Serialize, Deserialize)]
pub struct MovementsManager {
    movements: Vec<Movement>, // Sorted by operation date
    #[serde(skip)]
    ids: HashSet<RecordId>,
    #[serde(skip)]
    path: String,
    #[serde(skip)]
    persist: bool,
}

impl Persistable for MovementsManager {
    const FILE_NAME: &'static str = "movements";

    fn default_new(path: String, persist: bool) -> Self {
        Self {
            movements: Vec::new(),
            ids: HashSet::new(),
            path,
            persist,
        }
    }

    fn restore(&mut self, path: String, persist: bool) {
        self.ids = self.movements.iter().map(|m| m.id.clone()).collect();
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

impl MovementsManager {
    pub fn get(&self) -> &Vec<Movement> {
        return &self.movements;
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    pub fn push(&mut self, movement: Movement) -> bool {
        if !self.ids.insert(movement.id.clone()) {
            return false;
        }
        let index = self
            .movements
            .partition_point(|existing| existing.operation_date <= movement.operation_date);
        self.movements.insert(index, movement);
        true
    }

    pub fn extend(&mut self, movements: Vec<Movement>) -> InsertReport {
        let mut report = InsertReport::default();
        for movement in movements {
            report.add(self.push(movement));
        }
        report
    }

    pub fn in_range(&self, range: DateRange) -> impl Iterator<Item = &Movement> + '_ {
        self.movements
            .iter()
            .filter(move |movement| range.contains(&movement.operation_date))
    }

    pub fn by_category(&self, category: MovementCategory) -> impl Iterator<Item = &Movement> + '_ {
        self.movements
            .iter()
            .filter(move |movement| movement.is_category(category))
    }

    pub fn by_description<'a>(&'a self, description: &'a str) -> impl Iterator<Item = &'a Movement> {
        self.movements
            .iter()
            .filter(move |movement| movement.description == description)
    }
}

impl Drop for MovementsManager {
    fn drop(&mut self) {
        self.save_on_drop();
    }
}

#[cfg(test)]
mod tests {

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serial_test::serial;

    use super::*;

    fn movement(month: u32, amount: Decimal, description: &str) -> Movement {
        Movement::new(
            NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            None,
            amount,
            description.to_string(),
            format!("{description} completa"),
        )
    }

    #[test]
    fn test_unicity_and_filters() {
        let mut manager = MovementsManager::new_non_persistent().unwrap();
        let report = manager.extend(vec![
            movement(3, dec!(-20), "Canone mensile"),
            movement(1, dec!(1000), "Bonifico"),
            movement(1, dec!(1000), "Bonifico"),
        ]);
        assert_eq!(report, InsertReport { inserted: 2, duplicates: 1 });
        assert_eq!(manager.get()[0].description, "Bonifico");

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 2, 1),
            NaiveDate::from_ymd_opt(2024, 12, 31),
        )
        .unwrap();
        assert_eq!(manager.in_range(range).count(), 1);
        assert_eq!(manager.by_category(MovementCategory::Bonifici).count(), 1);
        assert_eq!(manager.by_description("Canone mensile").count(), 1);
    }

    #[test]
    #[serial]
    fn test_save_and_reload() {
        let path = ".data_test/movements".to_string();
        {
            let mut manager = MovementsManager::new(Some(path.clone())).unwrap();
            manager.push(movement(1, dec!(1000), "Bonifico"));
        }

        let mut manager = MovementsManager::new(Some(path)).unwrap();
        assert_eq!(manager.len(), 1);
        assert!(!manager.push(movement(1, dec!(1000), "Bonifico")));
        manager.delete().unwrap();
        manager.persist = false;
    }
}
