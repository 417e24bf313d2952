//! Calendar display color.

use calprop_rfc::rfc::dav::core::{PropertySet, apple_props};

/// Length of a `#rrggbbaa` color.
const RGBA_LEN: usize = 9;
/// Length of a `#rrggbb` color.
const RGB_LEN: usize = 7;

/// Returns the calendar color, or `fallback` when none is set.
///
/// Some clients store an alpha channel (`#rrggbbaa`); those values are cut
/// down to `#rrggbb`. Any other non-empty text is returned unchanged.
#[must_use]
pub fn color(props: &PropertySet, fallback: &str) -> String {
    let Some(color) = props
        .text(&apple_props::CALENDAR_COLOR)
        .filter(|color| !color.is_empty())
    else {
        tracing::trace!(fallback, "No calendar color, using fallback");
        return fallback.to_owned();
    };

    if color.chars().count() == RGBA_LEN {
        color.chars().take(RGB_LEN).collect()
    } else {
        color.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use calprop_rfc::rfc::dav::core::Element;

    use super::*;

    const FALLBACK: &str = "#1d2d44";

    fn with_color(value: &str) -> PropertySet {
        PropertySet::new().with(apple_props::CALENDAR_COLOR, value)
    }

    #[test]
    fn alpha_suffix_is_stripped() {
        assert_eq!(color(&with_color("#0082c9ff"), FALLBACK), "#0082c9");
    }

    #[test]
    fn other_values_unchanged() {
        assert_eq!(color(&with_color("#0082c9"), FALLBACK), "#0082c9");
        assert_eq!(color(&with_color("red"), FALLBACK), "red");
        assert_eq!(color(&with_color("#0082c9ff0"), FALLBACK), "#0082c9ff0");
    }

    #[test]
    fn fallback_when_absent_empty_or_elements() {
        assert_eq!(color(&PropertySet::new(), FALLBACK), FALLBACK);
        assert_eq!(color(&with_color(""), FALLBACK), FALLBACK);

        let props = PropertySet::new().with(
            apple_props::CALENDAR_COLOR,
            vec![Element::new(apple_props::CALENDAR_COLOR)],
        );
        assert_eq!(color(&props, FALLBACK), FALLBACK);
    }
}
