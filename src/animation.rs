//! One-shot presentation transitions.
//!
//! The dialog's open and close animations are cooperative: the host render
//! loop calls [`Transition::advance`] with elapsed time, and teardown work
//! runs when the transition reports completion. Nothing here blocks or
//! polls.

use std::time::Duration;

/// Duration of both the opening and closing transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Backdrop opacity while the dialog is fully presented.
pub const BACKDROP_ALPHA: f32 = 0.4;

/// Scale the card starts from while opening.
pub const OPEN_START_SCALE: f32 = 1.3;

/// Card opacity at the start of the opening transition.
pub const OPEN_START_OPACITY: f32 = 0.5;

/// Factor applied to the card's scale while closing.
pub const CLOSE_SCALE_FACTOR: f32 = 0.6;

/// Rotation the card spins through while closing, in degrees.
pub const CLOSE_ROTATION_DEG: f32 = 270.0;

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, Default)]
pub enum Easing {
    Linear,
    EaseOut,
    /// The toolkit's default animation curve.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Everything the presentation layer needs to draw one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Opacity of the black backdrop behind the card, 0.0 to 1.0.
    pub backdrop_alpha: f32,
    /// Opacity of the dialog card.
    pub card_opacity: f32,
    /// Uniform scale of the dialog card.
    pub card_scale: f32,
    /// Rotation of the dialog card in degrees.
    pub card_rotation: f32,
}

impl VisualState {
    /// Nothing visible; the state before `show` and after teardown.
    pub fn hidden() -> Self {
        Self {
            backdrop_alpha: 0.0,
            card_opacity: 0.0,
            card_scale: 1.0,
            card_rotation: 0.0,
        }
    }

    /// Fully presented.
    pub fn presented() -> Self {
        Self {
            backdrop_alpha: BACKDROP_ALPHA,
            card_opacity: 1.0,
            card_scale: 1.0,
            card_rotation: 0.0,
        }
    }

    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            backdrop_alpha: mix(from.backdrop_alpha, to.backdrop_alpha),
            card_opacity: mix(from.card_opacity, to.card_opacity),
            card_scale: mix(from.card_scale, to.card_scale),
            card_rotation: mix(from.card_rotation, to.card_rotation),
        }
    }
}

/// A running one-shot transition between two visual states.
#[derive(Debug)]
pub struct Transition {
    from: VisualState,
    to: VisualState,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Transition {
    /// The opening transition: backdrop fades in, the card settles from an
    /// oversized, half-transparent start.
    pub fn opening() -> Self {
        Self {
            from: VisualState {
                backdrop_alpha: 0.0,
                card_opacity: OPEN_START_OPACITY,
                card_scale: OPEN_START_SCALE,
                card_rotation: 0.0,
            },
            to: VisualState::presented(),
            duration: TRANSITION_DURATION,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// The closing transition: from wherever the card currently is, spin it
    /// 270 degrees while shrinking and fading everything out.
    pub fn closing(current: VisualState) -> Self {
        Self {
            to: VisualState {
                backdrop_alpha: 0.0,
                card_opacity: 0.0,
                card_scale: current.card_scale * CLOSE_SCALE_FACTOR,
                card_rotation: CLOSE_ROTATION_DEG,
            },
            from: current,
            duration: TRANSITION_DURATION,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Advance by `dt`. Returns true exactly once, on the tick that
    /// completes the transition.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.elapsed >= self.duration {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.elapsed >= self.duration
    }

    /// The interpolated visual state at the current progress.
    pub fn value(&self) -> VisualState {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t.clamp(0.0, 1.0));
        VisualState::lerp(&self.from, &self.to, eased)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
