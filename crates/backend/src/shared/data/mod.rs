pub mod dataset;
pub mod generator;

pub use dataset::SalesDataset;
