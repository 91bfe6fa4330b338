pub mod di;
pub mod parsers;
pub mod repositories;
