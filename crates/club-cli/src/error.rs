use club_api::ApiError;
use club_core::{CoreError, ExportError};
use thiserror::Error;

/// Fatal errors of one export run. Per-member fetch failures never surface here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The authenticated profile names no club.
    #[error("User is not in a club or clubId not found in profile")]
    NoClub,

    #[error(transparent)]
    Record(#[from] CoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
