use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::structs::{DateRange, Isin, OrderRecord, RecordId};

use super::{InsertReport, Persistable};

/* This orders manager will handle saving the orders and loading the previous ones if they exist, the merging
of imports and it will implement the Drop trait to save when reference is dropped */
#[derive(Serialize, Deserialize)]
pub struct OrdersManager {
    orders: Vec<OrderRecord>, // Always sorted by operation date
    #[serde(skip)]
    ids: HashSet<RecordId>, // Rebuilt on load, prevents importing the same row twice
    #[serde(skip)]
    path: String,
    #[serde(skip)]
    persist: bool,
}

impl Persistable for OrdersManager {
    const FILE_NAME: &'static str = "orders";

    fn default_new(path: String, persist: bool) -> Self {
        Self {
            orders: Vec::new(),
            ids: HashSet::new(),
            path,
            persist,
        }
    }

    fn restore(&mut self, path: String, persist: bool) {
        self.ids = self.orders.iter().map(|order| order.id.clone()).collect();
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

impl OrdersManager {
    pub fn get(&self) -> &Vec<OrderRecord> {
        return &self.orders;
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /* Add an order by avoiding duplicates, return whether it was added */
    pub fn push(&mut self, order: OrderRecord) -> bool {
        if !self.ids.insert(order.id.clone()) {
            return false;
        }
        // Keep the vector sorted, orders mostly come in chronological order
        let index = self
            .orders
            .partition_point(|existing| existing.operation_date <= order.operation_date);
        self.orders.insert(index, order);
        true
    }

    /* Extends orders by avoiding duplicates */
    pub fn extend(&mut self, orders: Vec<OrderRecord>) -> InsertReport {
        let mut report = InsertReport::default();
        for order in orders {
            report.add(self.push(order));
        }
        report
    }

    /* Orders of one security, oldest first */
    pub fn get_by_isin(&self, isin: &str) -> Vec<OrderRecord> {
        self.orders
            .iter()
            .filter(|order| order.isin == isin)
            .cloned()
            .collect()
    }

    pub fn in_range(&self, range: DateRange) -> impl Iterator<Item = &OrderRecord> + '_ {
        self.orders
            .iter()
            .filter(move |order| range.contains(&order.operation_date))
    }

    /* Orders grouped by security */
    pub fn group_by_isin(&self) -> HashMap<Isin, Vec<OrderRecord>> {
        let mut groups: HashMap<Isin, Vec<OrderRecord>> = HashMap::new();
        for order in &self.orders {
            groups
                .entry(order.isin.clone())
                .or_default()
                .push(order.clone());
        }
        groups
    }
}

impl Drop for OrdersManager {
    fn drop(&mut self) {
        self.save_on_drop();
    }
}

#[cfg(test)]
mod tests {

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serial_test::serial;

    use crate::structs::Sign;

    use super::*;

    fn order(day: u32, isin: &str, sign: Sign, gross_value: rust_decimal::Decimal) -> OrderRecord {
        OrderRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            isin.to_string(),
            sign,
            dec!(1),
            gross_value,
            gross_value,
            dec!(0),
        )
    }

    #[test]
    fn test_unicity() {
        let mut manager = OrdersManager::new_non_persistent().unwrap();

        let report = manager.extend(vec![
            order(2, "IT0001", Sign::Buy, dec!(100)),
            order(2, "IT0001", Sign::Buy, dec!(100)),
            order(2, "IT0001", Sign::Sell, dec!(100)),
        ]);

        assert_eq!(report, InsertReport { inserted: 2, duplicates: 1 });
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_sorted_and_by_isin() {
        let mut manager = OrdersManager::new_non_persistent().unwrap();
        manager.extend(vec![
            order(20, "IT0001", Sign::Sell, dec!(120)),
            order(3, "IT0002", Sign::Buy, dec!(50)),
            order(1, "IT0001", Sign::Buy, dec!(100)),
        ]);

        let days: Vec<u32> = manager
            .get()
            .iter()
            .map(|o| chrono::Datelike::day(&o.operation_date))
            .collect();
        assert_eq!(days, vec![1, 3, 20]);

        let first = manager.get_by_isin("IT0001");
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].amount, dec!(-100));
        assert_eq!(first[1].amount, dec!(120));

        let groups = manager.group_by_isin();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["IT0002"].len(), 1);
    }

    #[test]
    #[serial]
    fn test_save_and_reload() {
        let path = ".data_test/orders".to_string();
        {
            let mut manager = OrdersManager::new(Some(path.clone())).unwrap();
            manager.push(order(5, "IT0001", Sign::Buy, dec!(100)));
        } // Saved on drop

        let mut manager = OrdersManager::new(Some(path.clone())).unwrap();
        assert_eq!(manager.len(), 1);
        // The index is rebuilt: the same order is still a duplicate
        assert!(!manager.push(order(5, "IT0001", Sign::Buy, dec!(100))));

        manager.delete().unwrap();
        manager.persist = false;
    }
}
