pub mod report;
pub mod survey;
