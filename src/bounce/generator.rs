// src/bounce/generator.rs
use bevy::log::debug;
use bevy::math::Vec3;

use super::error::{BounceError, Result};
use super::keyframe::{KeyframeEvent, KeyframeKind};
use super::request::BounceAnimationRequest;

/// Gravitational constant used for the free-fall timing. One time unit is one frame.
pub const GRAVITY: f64 = 10.0;
/// Lower bound for the vertical scale of a squashed ball.
pub const MIN_SQUASH_SCALE: f32 = 0.01;

/// Validated output of [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct BounceAnimation {
    pub request: BounceAnimationRequest,
    /// Frames the whole bounce sequence takes, as computed by the dry run.
    pub required_frames: f64,
    pub keyframes: Vec<KeyframeEvent>,
}

impl BounceAnimation {
    /// Heights of the peak keyframes, in order.
    pub fn peak_heights(&self) -> Vec<f32> {
        self.keyframes
            .iter()
            .filter(|key| key.kind == KeyframeKind::Peak)
            .map(|key| key.height)
            .collect()
    }

    /// Frame of the last keyframe.
    pub fn end_frame(&self) -> f64 {
        self.keyframes
            .last()
            .map_or(self.request.start_frame as f64, |key| key.frame)
    }
}

/// Time to fall from (or rise to) `height`: t = sqrt(2h / g).
pub fn free_fall_time(height: f64) -> f64 {
    (2.0 * height / GRAVITY).sqrt()
}

/// One bounce: the fall from the current height and the rise to the decayed one.
#[derive(Debug, Clone, Copy)]
struct BounceStep {
    fall_time: f64,
    rise_time: f64,
    peak_height: f64,
}

/// Shared by the dry run and the emitting pass so both see identical timings.
///
/// Timing stays in f64: with f32 the steps of late bounces fall below the
/// spacing of the running offset and consecutive keys land on the same frame.
fn bounce_steps(request: &BounceAnimationRequest) -> impl Iterator<Item = BounceStep> {
    let decay = f64::from(request.bounce_decay);
    let mut height = f64::from(request.start_height);
    (0..request.num_bounces).map(move |_| {
        let fall_time = free_fall_time(height);
        height *= decay;
        BounceStep {
            fall_time,
            rise_time: free_fall_time(height),
            peak_height: height,
        }
    })
}

/// Dry run: total frames needed by every fall and rise.
pub fn required_frames(request: &BounceAnimationRequest) -> f64 {
    let mut total = 0.0;
    for step in bounce_steps(request) {
        total += step.fall_time;
        total += step.rise_time;
    }
    total
}

/// Scale at touch-down: wider on x/z, flatter on y.
pub fn squash_scale(squash_stretch: f32) -> Vec3 {
    Vec3::new(
        1.0 + squash_stretch,
        (1.0 - squash_stretch).max(MIN_SQUASH_SCALE),
        1.0 + squash_stretch,
    )
}

/// Validates `request` and computes its keyframes.
///
/// Produces `2 * num_bounces + 1` events: the initial key at the start height,
/// then a touch-down and a peak for every bounce. Nothing is produced when the
/// request is rejected. Frames never decrease; once a bounce gets shorter than
/// the f64 spacing at its frame, its keys share the previous frame.
pub fn generate(request: &BounceAnimationRequest) -> Result<BounceAnimation> {
    request.validate()?;

    let required = required_frames(request);
    let available = request.available_frames();
    debug!(
        "bounce requires {:.2} frames, {} available",
        required, available
    );
    if !required.is_finite() || required > available as f64 {
        return Err(BounceError::InsufficientFrameSpan {
            required,
            available,
        });
    }

    let start = f64::from(request.start_frame);
    let squashed = squash_scale(request.squash_stretch);
    let mut keyframes = Vec::with_capacity(2 * request.num_bounces as usize + 1);
    keyframes.push(KeyframeEvent {
        kind: KeyframeKind::Initial,
        frame: start,
        offset: 0.0,
        height: request.start_height,
        scale: Vec3::ONE,
    });

    // same accumulation order as required_frames, so the last offset equals it
    let mut elapsed = 0.0;
    for step in bounce_steps(request) {
        elapsed += step.fall_time;
        keyframes.push(KeyframeEvent {
            kind: KeyframeKind::TouchDown,
            frame: start + elapsed,
            offset: elapsed,
            height: 0.0,
            scale: squashed,
        });
        elapsed += step.rise_time;
        keyframes.push(KeyframeEvent {
            kind: KeyframeKind::Peak,
            frame: start + elapsed,
            offset: elapsed,
            height: step.peak_height as f32,
            scale: Vec3::ONE,
        });
    }

    Ok(BounceAnimation {
        request: *request,
        required_frames: required,
        keyframes,
    })
}

/// Six-scalar form of [`generate`].
pub fn generate_keyframes(
    start_height: f32,
    num_bounces: u32,
    bounce_decay: f32,
    squash_stretch: f32,
    start_frame: i32,
    end_frame: i32,
) -> Result<Vec<KeyframeEvent>> {
    let request = BounceAnimationRequest {
        start_height,
        num_bounces,
        bounce_decay,
        squash_stretch,
        start_frame,
        end_frame,
    };
    generate(&request).map(|animation| animation.keyframes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn request(height: f32, bounces: u32, decay: f32, squash: f32) -> BounceAnimationRequest {
        BounceAnimationRequest {
            start_height: height,
            num_bounces: bounces,
            bounce_decay: decay,
            squash_stretch: squash,
            start_frame: 1,
            end_frame: 120,
        }
    }

    #[test]
    fn free_fall_from_ten_takes_sqrt_two() {
        assert!((free_fall_time(10.0) - 2f64.sqrt()).abs() < EPS);
        assert_eq!(free_fall_time(0.0), 0.0);
    }

    #[test]
    fn reference_scenario() {
        let animation = generate(&request(10.0, 3, 0.5, 0.2)).unwrap();
        assert_eq!(animation.keyframes.len(), 7);
        assert_eq!(animation.peak_heights(), vec![5.0, 2.5, 1.25]);

        let first = animation.keyframes[0];
        assert_eq!(first.kind, KeyframeKind::Initial);
        assert_eq!(first.frame, 1.0);
        assert_eq!(first.height, 10.0);
        assert_eq!(first.scale, Vec3::ONE);

        let touch = animation.keyframes[1];
        assert_eq!(touch.kind, KeyframeKind::TouchDown);
        assert_eq!(touch.height, 0.0);
        assert!((touch.offset - 2f64.sqrt()).abs() < EPS);
        assert!((touch.scale - Vec3::new(1.2, 0.8, 1.2)).length() < 1e-5);

        // 1.4142 + 1 + 1 + 0.7071 + 0.7071 + 0.5
        let expected = 2f64.sqrt() + 2.0 + 2.0 * 0.5f64.sqrt() + 0.5;
        assert!((animation.required_frames - expected).abs() < EPS);
        assert!((animation.end_frame() - (1.0 + expected)).abs() < EPS);
    }

    #[test]
    fn event_count_matches_bounces() {
        for bounces in [0, 1, 2, 5, 7, 40, 100] {
            let animation = generate(&request(5.0, bounces, 0.5, 0.1)).unwrap();
            assert_eq!(animation.keyframes.len(), 2 * bounces as usize + 1);
        }
    }

    #[test]
    fn zero_bounces_yields_initial_key_only() {
        let animation = generate(&request(10.0, 0, 0.5, 0.2)).unwrap();
        assert_eq!(animation.keyframes.len(), 1);
        assert_eq!(animation.keyframes[0].kind, KeyframeKind::Initial);
        assert_eq!(animation.required_frames, 0.0);
    }

    #[test]
    fn heights_strictly_decrease() {
        for (bounces, decay) in [(6, 0.6), (100, 0.5)] {
            let animation = generate(&request(10.0, bounces, decay, 0.3)).unwrap();
            let mut previous = animation.request.start_height;
            for height in animation.peak_heights() {
                assert!(height < previous, "{height} !< {previous}");
                previous = height;
            }
        }
    }

    #[test]
    fn frames_are_monotonic() {
        for (bounces, decay) in [(5, 0.8), (100, 0.5)] {
            let animation = generate(&request(10.0, bounces, decay, 0.2)).unwrap();
            for pair in animation.keyframes.windows(2) {
                assert!(
                    pair[1].frame > pair[0].frame,
                    "{:?} does not follow {:?}",
                    pair[1],
                    pair[0]
                );
                assert_eq!(pair[1].frame, 1.0 + pair[1].offset);
            }
            let last = animation.keyframes.last().unwrap();
            assert_eq!(last.offset, animation.required_frames);
        }
    }

    #[test]
    fn no_squash_keeps_neutral_scale() {
        let animation = generate(&request(10.0, 4, 0.5, 0.0)).unwrap();
        assert!(animation.keyframes.iter().all(|key| key.scale == Vec3::ONE));
    }

    #[test]
    fn heavy_squash_is_clamped() {
        assert_eq!(squash_scale(1.5).y, MIN_SQUASH_SCALE);
        assert_eq!(squash_scale(1.5).x, 2.5);
    }

    #[test]
    fn inverted_frame_range_is_rejected() {
        let result = generate_keyframes(10.0, 3, 0.5, 0.2, 50, 10);
        assert_eq!(
            result,
            Err(BounceError::InvalidFrameRange {
                start_frame: 50,
                end_frame: 10
            })
        );
    }

    #[test]
    fn full_width_frame_range_is_accepted() {
        let keyframes =
            generate_keyframes(10.0, 3, 0.5, 0.2, -2_000_000_000, 2_000_000_000).unwrap();
        assert_eq!(keyframes.len(), 7);
        assert_eq!(keyframes[0].frame, -2_000_000_000.0);

        let request = BounceAnimationRequest {
            start_frame: i32::MIN,
            end_frame: i32::MAX,
            ..Default::default()
        };
        assert_eq!(request.available_frames(), u32::MAX as i64);
        assert!(generate(&request).is_ok());
    }

    #[test]
    fn narrow_span_is_rejected() {
        let result = generate_keyframes(1000.0, 20, 0.5, 0.2, 1, 10);
        match result {
            Err(BounceError::InsufficientFrameSpan {
                required,
                available,
            }) => {
                assert_eq!(available, 9);
                assert!(required > 9.0);
            }
            other => panic!("expected InsufficientFrameSpan, got {other:?}"),
        }
    }

    #[test]
    fn non_decaying_bounce_overflows_span() {
        let result = generate(&BounceAnimationRequest {
            bounce_decay: 1.0,
            num_bounces: 100,
            ..request(10.0, 0, 1.0, 0.2)
        });
        assert!(matches!(
            result,
            Err(BounceError::InsufficientFrameSpan { .. })
        ));
    }

    #[test]
    fn zero_decay_stops_after_first_touch() {
        let animation = generate(&request(10.0, 2, 0.0, 0.2)).unwrap();
        assert_eq!(animation.peak_heights(), vec![0.0, 0.0]);
        assert!((animation.required_frames - 2f64.sqrt()).abs() < EPS);
    }
}
