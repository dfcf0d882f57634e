mod builders;
pub mod models;
pub mod parser;
mod storage;

use std::{collections::TryReserveError, io};

use thiserror::Error;

pub use crate::builders::{DocumentBuilder, SectionBuilder};
pub use crate::models::{Document, Parameter, Section};
pub use crate::parser::ParseError;
pub use crate::storage::GrowthPolicy;

pub const DEFAULT_SECTION_CAPACITY: usize = 4;
pub const DEFAULT_SECTION_GROWTH: GrowthPolicy = GrowthPolicy::Fixed(4);
pub const DEFAULT_PARAMETER_CAPACITY: usize = 8;
pub const DEFAULT_PARAMETER_GROWTH: GrowthPolicy = GrowthPolicy::Fixed(8);

#[derive(Error, Debug)]
pub enum TiniError {
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("Parameter {key} already exists and replacement was not requested")]
    AlreadyExists { key: String },
    #[error("Section [{0}] already exists")]
    SectionAlreadyExists(String),
    #[error("Section [{0}] was not found")]
    SectionNotFound(String),
    #[error("Parameter {0} was not found")]
    ParameterNotFound(String),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
