use std::time::Duration;

use bevy::prelude::*;

use super::resolver::SwapRequest;

/// Quadratic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0f32).mul_add(t, 2.0).powi(2) / 2.0
    }
}

/// Timed slide of two pieces toward each other's cell.
#[derive(Debug, Clone)]
pub struct SwapAnimation {
    request: SwapRequest,
    timer: Timer,
    travel: Vec2,
}

impl SwapAnimation {
    /// `travel` is the board-space vector from the start cell's center to the
    /// destination's center.
    pub fn new(request: SwapRequest, travel: Vec2, duration: Duration) -> Self {
        Self {
            request,
            timer: Timer::new(duration, TimerMode::Once),
            travel,
        }
    }

    pub const fn request(&self) -> SwapRequest {
        self.request
    }

    /// Advances the clock. Returns `true` once the duration has elapsed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.timer.finished()
    }

    pub fn progress(&self) -> f32 {
        ease_in_out_quad(self.timer.fraction())
    }

    /// Current offsets of the start piece and the destination piece. They
    /// always mirror each other.
    pub fn offsets(&self) -> (Vec2, Vec2) {
        let offset = self.travel * self.progress();
        (offset, -offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, resolve_swap};

    fn right_swap(duration_ms: u64) -> SwapAnimation {
        let request =
            resolve_swap(Cell::new(2, 2), Cell::new(3, 2), 8, 5).expect("adjacent cells");
        SwapAnimation::new(
            request,
            Vec2::new(32.0, 0.0),
            Duration::from_millis(duration_ms),
        )
    }

    #[test]
    fn easing_hits_the_endpoints_and_midpoint() {
        assert!(ease_in_out_quad(0.0).abs() < 1e-6, "starts at rest");
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6, "halfway at half time");
        assert!((ease_in_out_quad(1.0) - 1.0).abs() < 1e-6, "ends on target");
        assert!(ease_in_out_quad(0.25) < 0.25, "slow start");
        assert!(ease_in_out_quad(0.75) > 0.75, "slow finish");
    }

    #[test]
    fn offsets_mirror_each_other_while_running() {
        let mut animation = right_swap(500);
        assert_eq!(animation.offsets(), (Vec2::ZERO, Vec2::ZERO), "no movement yet");

        assert!(!animation.tick(Duration::from_millis(250)), "halfway");
        let (a, b) = animation.offsets();
        assert!((a.x - 16.0).abs() < 1e-3, "start piece is half way right: {a}");
        assert_eq!(a, -b, "destination piece moves the opposite way");
    }

    #[test]
    fn finishes_exactly_on_the_target() {
        let mut animation = right_swap(500);
        animation.tick(Duration::from_millis(300));
        assert!(animation.tick(Duration::from_millis(300)), "past the duration");
        let (a, b) = animation.offsets();
        assert!((a - Vec2::new(32.0, 0.0)).length() < 1e-4, "start piece arrived: {a}");
        assert!((b - Vec2::new(-32.0, 0.0)).length() < 1e-4, "other piece arrived: {b}");
    }
}
