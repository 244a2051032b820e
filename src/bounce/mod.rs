// src/bounce/mod.rs

pub mod error;
pub mod generator;
pub mod keyframe;
pub mod request;

pub use error::BounceError;
pub use generator::{BounceAnimation, GRAVITY, generate, generate_keyframes, required_frames};
pub use keyframe::{KeyframeEvent, KeyframeKind};
pub use request::BounceAnimationRequest;
