use crate::constants::{GRADIENT_PERIOD, GRADIENT_STEP};

/// Background-position offset for the animated gradient, in percent.
///
/// Advanced once per display frame and wrapped on a fixed period; a viewport
/// resize puts it back at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientOffset {
    value: f64,
}

impl GradientOffset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step one frame forward and return the new offset.
    #[inline]
    pub fn advance(&mut self) -> f64 {
        self.value = (self.value + GRADIENT_STEP) % GRADIENT_PERIOD;
        self.value
    }

    #[inline]
    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// CSS `background-position` value for the current offset.
    pub fn css_position(&self) -> String {
        format!("{}% 50%", self.value)
    }
}
