// src/host/mod.rs
//! The seam between the bounce generator and whatever owns the scene.
//!
//! A host can create one primitive and set keyframes on it. [`apply_bounce`]
//! drives a host with a generated bounce, and only touches the host once the
//! request has been validated.

pub mod clip;
pub mod recording;

use bevy::log::warn;
use bevy::math::Vec3;

use crate::bounce::{BounceAnimation, BounceAnimationRequest, generate};
use crate::bounce::error::Result;

pub use clip::{BallTarget, ClipHost};
pub use recording::{HostCall, RecordingHost};

/// Animated attributes of the bounced primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAttribute {
    Translation,
    Scale,
}

pub trait AnimationHost {
    type Object;

    fn create_primitive(&mut self, name: &str) -> Self::Object;

    fn set_keyframe(
        &mut self,
        object: &Self::Object,
        attribute: KeyAttribute,
        value: Vec3,
        frame: f64,
    );
}

/// Generates the bounce for `request`, creates the primitive and keys it.
///
/// A rejected request leaves the host untouched.
pub fn apply_bounce<H: AnimationHost>(
    host: &mut H,
    name: &str,
    request: &BounceAnimationRequest,
) -> Result<(H::Object, BounceAnimation)> {
    let animation = generate(request).inspect_err(|e| warn!("{name}: {e}"))?;

    let object = host.create_primitive(name);
    for key in &animation.keyframes {
        host.set_keyframe(&object, KeyAttribute::Translation, key.translation(), key.frame);
        host.set_keyframe(&object, KeyAttribute::Scale, key.scale, key.frame);
    }
    Ok((object, animation))
}
