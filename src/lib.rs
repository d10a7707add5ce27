#![forbid(unsafe_code)]

pub mod config;

pub use config::{Config, TransformConfig};
pub use stitchgate_schema as schema;
pub use stitchgate_transforms as transforms;
pub use stitchgate_utils as utils;
