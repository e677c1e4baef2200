use glam::DVec3;
use thiserror::Error;

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Malformed input to the box generators. Generation fails fast and nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("corner {0} contains a non-finite coordinate")]
    NonFinite(DVec3),

    #[error("max corner {max} is less than min corner {min} on at least one axis")]
    InvertedCorners { min: DVec3, max: DVec3 },

    #[error("got {min_count} min corners but {max_count} max corners")]
    MismatchedCorners { min_count: usize, max_count: usize },
}
