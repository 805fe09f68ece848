pub mod analyze;
pub mod demo;
pub mod orbit;
pub mod scan;
pub mod step;
