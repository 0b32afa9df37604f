pub mod format;
pub mod generator;
pub mod section;

pub use generator::ReportGenerator;
