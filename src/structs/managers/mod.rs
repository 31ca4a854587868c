pub mod persistable;
pub use persistable::*;

pub mod orders_manager;
pub use orders_manager::*;

pub mod securities_manager;
pub use securities_manager::*;

pub mod movements_manager;
pub use movements_manager::*;

pub mod storage;
pub use storage::*;
