use bevy::math::Vec3;

use super::{AnimationHost, KeyAttribute};

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreatePrimitive(String),
    SetKeyframe {
        object: usize,
        attribute: KeyAttribute,
        value: Vec3,
        frame: f64,
    },
}

/// Host that only remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    objects: usize,
}

impl RecordingHost {
    /// `(frame, value)` pairs set on `object` for `attribute`, in call order.
    pub fn keys(&self, object: usize, attribute: KeyAttribute) -> Vec<(f64, Vec3)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SetKeyframe {
                    object: o,
                    attribute: a,
                    value,
                    frame,
                } if *o == object && *a == attribute => Some((*frame, *value)),
                _ => None,
            })
            .collect()
    }
}

impl AnimationHost for RecordingHost {
    type Object = usize;

    fn create_primitive(&mut self, name: &str) -> usize {
        self.calls.push(HostCall::CreatePrimitive(name.to_string()));
        self.objects += 1;
        self.objects - 1
    }

    fn set_keyframe(&mut self, object: &usize, attribute: KeyAttribute, value: Vec3, frame: f64) {
        self.calls.push(HostCall::SetKeyframe {
            object: *object,
            attribute,
            value,
            frame,
        });
    }
}
