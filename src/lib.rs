pub mod error;
pub mod filters;
pub mod table;
