use thiserror::Error;

/// Reasons a bounce request is rejected before any keyframe is written.
///
/// None of these are fatal: the form reports them and the user can adjust the
/// parameters and try again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BounceError {
    #[error("end frame {end_frame} must be after start frame {start_frame}")]
    InvalidFrameRange { start_frame: i32, end_frame: i32 },
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error(
        "bounce needs {required:.2} frames but only {available} are available, \
         lower the height or bounce count or widen the frame range"
    )]
    InsufficientFrameSpan { required: f64, available: i64 },
}

pub type Result<T> = std::result::Result<T, BounceError>;
