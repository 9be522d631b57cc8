pub mod common;
mod property;
