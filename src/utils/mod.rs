pub mod files;
pub use files::*;

pub mod time;
pub use time::*;

pub mod id;
pub use id::*;

pub mod logging;
pub use logging::*;
