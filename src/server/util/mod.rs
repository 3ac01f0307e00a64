pub mod pagination;
pub mod parse;
pub mod request;
pub mod text;
