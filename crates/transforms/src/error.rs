use stitchgate_schema::ArgumentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}
