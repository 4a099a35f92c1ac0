pub mod results_model;
pub mod transform;
