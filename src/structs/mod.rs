pub mod order;
pub use order::*;

pub mod security;
pub use security::*;

pub mod movement;
pub use movement::*;

pub mod analysis;
pub use analysis::*;

pub mod date_range;
pub use date_range::*;

pub mod managers;
pub use managers::*;
