//! Command implementations

mod fix;
mod scan;

pub use fix::fix;
pub use scan::scan;
