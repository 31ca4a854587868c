pub mod order_analysis;
pub use order_analysis::*;

pub mod liquidity;
pub use liquidity::*;

pub mod taxes;
pub use taxes::*;
