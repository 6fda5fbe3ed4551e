use crate::constants::GRADIENT_TEXT_HOVER_COLOR;

/// Inline style applied to a gradient-text nav link.
///
/// Hovering freezes the gradient animation and shows a solid color; leaving
/// restores the animated, background-clipped text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientTextStyle {
    pub animation_play_state: &'static str,
    pub color: &'static str,
    pub background: &'static str,
    pub text_fill_color: &'static str,
}

impl GradientTextStyle {
    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            Self {
                animation_play_state: "paused",
                color: GRADIENT_TEXT_HOVER_COLOR,
                background: "none",
                text_fill_color: "unset",
            }
        } else {
            // empty background falls back to the stylesheet gradient
            Self {
                animation_play_state: "running",
                color: "transparent",
                background: "",
                text_fill_color: "transparent",
            }
        }
    }

    /// CSS property/value pairs, in application order.
    pub fn declarations(&self) -> [(&'static str, &'static str); 4] {
        [
            ("animation-play-state", self.animation_play_state),
            ("color", self.color),
            ("background", self.background),
            ("-webkit-text-fill-color", self.text_fill_color),
        ]
    }
}
