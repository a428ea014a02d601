pub mod category;
pub mod convention;
