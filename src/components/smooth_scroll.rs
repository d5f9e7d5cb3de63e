use log::debug;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::Callback;

use crate::error::{html_element_by_id, window, UiError};

/// Section id for a same-page anchor. A bare `#` has no target.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that puts the section's top edge right under the fixed header.
pub fn scroll_destination(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

pub fn scroll_to_anchor(href: &str) -> Result<(), UiError> {
    let Some(id) = anchor_id(href) else {
        return Ok(());
    };
    let target = html_element_by_id(id)?;
    let header = html_element_by_id("header")?;

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(
        target.offset_top() as f64,
        header.offset_height() as f64,
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Click handler for `<a href="#...">` links. Yew delegates events to the app
/// root, so the href is captured here instead of read from `current_target`.
pub fn anchor_click(href: impl Into<String>) -> Callback<MouseEvent> {
    let href = href.into();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = scroll_to_anchor(&href) {
            debug!("Smooth scroll to {} skipped: {}", href, err);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn hash_link_targets_its_section() {
        assert_eq!(anchor_id("#productos"), Some("productos"));
        assert_eq!(anchor_id("productos"), None);
    }

    #[test]
    fn destination_subtracts_header_height() {
        assert_eq!(scroll_destination(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_destination(40.0, 80.0), -40.0);
    }
}
