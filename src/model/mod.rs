pub mod category;
pub mod domain;
pub mod metric;
