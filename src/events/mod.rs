pub mod navigation;
pub mod scroll_top;
pub mod tap;

pub use navigation::{wire_gradient_text_hover, wire_section_switcher, wire_smooth_scroll};
pub use scroll_top::wire_scroll_top;
pub use tap::wire_tap_sound;
