mod priorities;
mod summary;
pub mod views;

pub use summary::AssessmentReport;

pub(crate) use priorities::select_priority_areas;
