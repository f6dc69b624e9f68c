pub mod parse;
pub mod load;
