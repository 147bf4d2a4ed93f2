//! Entrance/exit animation modelled as data: two named states plus a
//! timing descriptor, rendered to an inline style so components carry
//! no animation timing logic of their own.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
        }
    }
}

/// Timing descriptor for a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

/// Bottom bar entrance: slide up and fade in over 300ms after a 500ms
/// delay, reversed symmetrically on the way out.
pub const BOTTOM_BAR_TRANSITION: Transition = Transition {
    duration_ms: 300,
    delay_ms: 500,
    easing: Easing::EaseOut,
};

impl MotionState {
    /// Inline style for this state under the given transition.
    pub fn style(&self, transition: &Transition) -> String {
        let (opacity, translate) = match self {
            MotionState::Hidden => ("0", "100%"),
            MotionState::Visible => ("1", "0%"),
        };
        let timing = format!(
            "{}ms {} {}ms",
            transition.duration_ms,
            transition.easing.css(),
            transition.delay_ms
        );
        format!(
            "opacity: {}; transform: translateY({}); transition: opacity {}, transform {};",
            opacity, translate, timing, timing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_sits_below_the_viewport() {
        let style = MotionState::Hidden.style(&BOTTOM_BAR_TRANSITION);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(100%)"));
    }

    #[test]
    fn visible_is_fully_opaque_at_rest() {
        let style = MotionState::Visible.style(&BOTTOM_BAR_TRANSITION);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0%)"));
    }

    #[test]
    fn both_states_share_the_timing_descriptor() {
        for state in [MotionState::Hidden, MotionState::Visible] {
            let style = state.style(&BOTTOM_BAR_TRANSITION);
            assert!(style.contains("300ms ease-out 500ms"));
        }
    }
}
