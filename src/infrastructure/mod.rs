pub mod observability;
pub mod speech;
