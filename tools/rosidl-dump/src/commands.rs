pub mod interface;
pub mod parse;
