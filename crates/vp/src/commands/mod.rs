pub mod generate;
pub mod shell;
pub mod validate;
