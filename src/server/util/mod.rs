pub mod fuzzy;
pub mod parse;
