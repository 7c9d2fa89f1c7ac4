mod scan;
mod summary;

pub use scan::*;
pub use summary::*;
