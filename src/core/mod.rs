pub mod calculator;
pub mod engine;
pub mod loader;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{Command, Configuration, Direction, Mode, RawConfiguration};
pub use crate::domain::ports::{Pipeline, Source};
pub use crate::utils::error::Result;
