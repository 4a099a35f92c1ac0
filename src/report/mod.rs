pub mod report_model;
pub mod writer;
