pub mod io_error;
pub use io_error::*;

pub mod parsing_error;
pub use parsing_error::*;

pub mod range_error;
pub use range_error::*;

pub mod config_error;
pub use config_error::*;

pub mod app_error;
pub use app_error::*;
