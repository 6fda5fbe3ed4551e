use crate::constants::SCROLL_TOP_THRESHOLD_PX;

/// `display` value of the scroll-to-top control for a vertical scroll offset.
#[inline]
pub fn scroll_top_display(offset: f64) -> &'static str {
    if offset > SCROLL_TOP_THRESHOLD_PX {
        "block"
    } else {
        "none"
    }
}

/// Element id referenced by a same-page anchor `href` (`#section-x` -> `section-x`).
///
/// Returns `None` for hrefs that are not fragment-only or name no id.
#[inline]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
