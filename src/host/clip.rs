// src/host/clip.rs
use bevy::animation::{AnimationClip, AnimationTargetId};
use bevy::math::curve::{ConstantCurve, Interval, UnevenSampleAutoCurve};
use bevy::prelude::*;
use bevy_animation::animated_field;

use super::{AnimationHost, KeyAttribute};

/// The primitive a [`ClipHost`] animates, addressed by name inside the clip.
#[derive(Debug, Clone)]
pub struct BallTarget {
    pub name: Name,
    pub id: AnimationTargetId,
}

/// Collects keyframes and turns them into a bevy [`AnimationClip`].
///
/// Frames map to clip time as `(frame - start_frame) / frames_per_second`, so
/// the clip starts on the request's start frame and lasts
/// `required_frames / frames_per_second`.
#[derive(Debug)]
pub struct ClipHost {
    frames_per_second: f32,
    start_frame: i32,
    translations: Vec<(f32, Vec3)>,
    scales: Vec<(f32, Vec3)>,
}

impl ClipHost {
    pub fn new(frames_per_second: f32, start_frame: i32) -> Self {
        Self {
            frames_per_second,
            start_frame,
            translations: Vec::new(),
            scales: Vec::new(),
        }
    }

    pub fn frame_to_seconds(&self, frame: f64) -> f32 {
        ((frame - f64::from(self.start_frame)) / f64::from(self.frames_per_second)) as f32
    }

    pub fn key_count(&self) -> usize {
        self.translations.len() + self.scales.len()
    }

    pub fn build_clip(&self, target: &BallTarget) -> AnimationClip {
        let mut clip = AnimationClip::default();
        match make_vec3_curve(&self.translations) {
            Some(KeyCurve::Sampled(curve)) => clip.add_curve_to_target(
                target.id,
                AnimatableCurve::new(animated_field!(Transform::translation), curve),
            ),
            Some(KeyCurve::Constant(curve)) => clip.add_curve_to_target(
                target.id,
                AnimatableCurve::new(animated_field!(Transform::translation), curve),
            ),
            None => {}
        }
        match make_vec3_curve(&self.scales) {
            Some(KeyCurve::Sampled(curve)) => clip.add_curve_to_target(
                target.id,
                AnimatableCurve::new(animated_field!(Transform::scale), curve),
            ),
            Some(KeyCurve::Constant(curve)) => clip.add_curve_to_target(
                target.id,
                AnimatableCurve::new(animated_field!(Transform::scale), curve),
            ),
            None => {}
        }
        clip
    }
}

impl AnimationHost for ClipHost {
    type Object = BallTarget;

    fn create_primitive(&mut self, name: &str) -> BallTarget {
        let name = Name::new(name.to_string());
        BallTarget {
            id: AnimationTargetId::from_name(&name),
            name,
        }
    }

    fn set_keyframe(&mut self, _object: &BallTarget, attribute: KeyAttribute, value: Vec3, frame: f64) {
        let time = self.frame_to_seconds(frame);
        match attribute {
            KeyAttribute::Translation => push_key(&mut self.translations, time, value),
            KeyAttribute::Scale => push_key(&mut self.scales, time, value),
        }
    }
}

// Keys closer together than f32 seconds can resolve land on one time. The
// later key replaces the earlier one so the curve ends on the last value set.
fn push_key(keys: &mut Vec<(f32, Vec3)>, time: f32, value: Vec3) {
    match keys.last_mut() {
        Some(last) if last.0 >= time => last.1 = value,
        _ => keys.push((time, value)),
    }
}

enum KeyCurve {
    Constant(ConstantCurve<Vec3>),
    Sampled(UnevenSampleAutoCurve<Vec3>),
}

// A single key holds its value from the start of the clip up to that key.
fn make_vec3_curve(keys: &[(f32, Vec3)]) -> Option<KeyCurve> {
    let (first_time, first_value) = *keys.first()?;
    if keys.len() > 1 {
        if let Ok(curve) = UnevenSampleAutoCurve::new(keys.iter().copied()) {
            return Some(KeyCurve::Sampled(curve));
        }
    }
    let interval = Interval::new(0.0, first_time.max(f32::EPSILON)).ok()?;
    Some(KeyCurve::Constant(ConstantCurve::new(interval, first_value)))
}
