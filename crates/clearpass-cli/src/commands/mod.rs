pub mod benchmark;
pub mod statement;
