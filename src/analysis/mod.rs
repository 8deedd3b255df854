pub mod compare;
pub mod price;

pub use compare::AreaComparator;
pub use price::price_report;
