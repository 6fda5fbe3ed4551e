use crate::constants::{TAP_RATE_MIN, TAP_RATE_SPAN, TAP_VOLUME_MIN, TAP_VOLUME_SPAN};
use rand::Rng;

/// Per-play variation of the tap sound so repeated clicks don't sound identical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapVariation {
    pub volume: f64,
    pub playback_rate: f64,
}

impl TapVariation {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            volume: TAP_VOLUME_MIN + rng.gen::<f64>() * TAP_VOLUME_SPAN,
            playback_rate: TAP_RATE_MIN + rng.gen::<f64>() * TAP_RATE_SPAN,
        }
    }
}

/// Whether an element with this tag name counts as interactive for the tap sound.
///
/// Links only count when they carry a destination.
#[inline]
pub fn is_tap_target_tag(tag_name: &str, has_href: bool) -> bool {
    match tag_name.to_ascii_uppercase().as_str() {
        "BUTTON" => true,
        "A" => has_href,
        _ => false,
    }
}
