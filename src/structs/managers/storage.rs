use crate::errors::IoError;

use super::{MovementsManager, OrdersManager, Persistable, SecuritiesManager};

/* Handle on every persisted collection, passed explicitly to whoever needs the data */
pub struct Storage {
    pub orders: OrdersManager,
    pub securities: SecuritiesManager,
    pub movements: MovementsManager,
}

impl Storage {
    pub fn open(data_dir: &str) -> Result<Self, IoError> {
        Ok(Self {
            orders: OrdersManager::in_dir(data_dir)?,
            securities: SecuritiesManager::in_dir(data_dir)?,
            movements: MovementsManager::in_dir(data_dir)?,
        })
    }

    pub fn non_persistent() -> Result<Self, IoError> {
        Ok(Self {
            orders: OrdersManager::new_non_persistent()?,
            securities: SecuritiesManager::new_non_persistent()?,
            movements: MovementsManager::new_non_persistent()?,
        })
    }

    pub fn save(&self) -> Result<(), IoError> {
        self.orders.save()?;
        self.securities.save()?;
        self.movements.save()
    }
}
