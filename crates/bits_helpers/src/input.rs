use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Held,
    Released,
}

/// One pointer observation in window coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: PointerPhase,
    /// `None` when the pointer is outside the window.
    pub position: Option<Vec2>,
}

/// This frame's pointer activity from the left mouse button, or else from the
/// first touch. A press and a release in the same frame both show up, press
/// first.
pub fn pointer_samples(
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    window: &Window,
) -> Vec<PointerSample> {
    let samples = mouse_samples(button_input, window.cursor_position());
    if samples.is_empty() {
        touch_samples(touch_input)
    } else {
        samples
    }
}

fn mouse_samples(
    button_input: &ButtonInput<MouseButton>,
    cursor: Option<Vec2>,
) -> Vec<PointerSample> {
    let mut samples = Vec::new();
    let mut push = |phase, position| samples.push(PointerSample { phase, position });

    if button_input.just_pressed(MouseButton::Left) {
        push(PointerPhase::Pressed, cursor);
    } else if button_input.pressed(MouseButton::Left) {
        push(PointerPhase::Held, cursor);
    }
    if button_input.just_released(MouseButton::Left) {
        push(PointerPhase::Released, cursor);
    }
    samples
}

fn touch_samples(touch_input: &Touches) -> Vec<PointerSample> {
    let mut samples = Vec::new();
    let mut push = |phase, position| samples.push(PointerSample { phase, position });

    if let Some(touch) = touch_input.iter_just_pressed().next() {
        push(PointerPhase::Pressed, Some(touch.position()));
    } else if let Some(touch) = touch_input.iter().next() {
        push(PointerPhase::Held, Some(touch.position()));
    }
    if let Some(touch) = touch_input.iter_just_released().next() {
        push(PointerPhase::Released, Some(touch.position()));
    } else if touch_input.iter_just_canceled().next().is_some() {
        push(PointerPhase::Released, None);
    }
    samples
}
