use bevy::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyframeKind {
    /// Ball held at the start height before the first fall.
    Initial,
    TouchDown,
    Peak,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeEvent {
    pub kind: KeyframeKind,
    /// Absolute frame, `start_frame + offset`.
    pub frame: f64,
    /// Frames elapsed since the start frame.
    pub offset: f64,
    /// Vertical position of the ball.
    pub height: f32,
    pub scale: Vec3,
}

impl KeyframeEvent {
    pub fn translation(&self) -> Vec3 {
        Vec3::new(0.0, self.height, 0.0)
    }
}
