pub mod category;
pub mod donation;
