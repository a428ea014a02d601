pub mod feed;
pub mod manager;
