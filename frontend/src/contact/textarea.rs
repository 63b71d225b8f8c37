use wasm_bindgen::JsValue;
use web_sys::{CssStyleDeclaration, HtmlTextAreaElement};

pub const MAX_HEIGHT_PX: f64 = 300.0;
pub const BASE_FONT_REM: f64 = 2.5;
pub const MIN_FONT_REM: f64 = 1.0;
/// Within this distance of the minimum font the text no longer fits, so the
/// box scrolls instead.
const SCROLL_MARGIN_REM: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
    Auto,
}

impl Overflow {
    fn as_css(self) -> &'static str {
        match self {
            Overflow::Hidden => "hidden",
            Overflow::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextareaLayout {
    pub height_px: f64,
    pub font_rem: f64,
    pub overflow: Overflow,
}

impl TextareaLayout {
    /// Layout for content that needs `natural_height` pixels at the base
    /// font size.
    pub fn for_natural_height(natural_height: f64) -> Self {
        if natural_height <= MAX_HEIGHT_PX {
            return Self {
                height_px: natural_height,
                font_rem: BASE_FONT_REM,
                overflow: Overflow::Hidden,
            };
        }
        let font_rem = (BASE_FONT_REM * (MAX_HEIGHT_PX / natural_height)).max(MIN_FONT_REM);
        let overflow = if font_rem <= MIN_FONT_REM + SCROLL_MARGIN_REM {
            Overflow::Auto
        } else {
            Overflow::Hidden
        };
        Self {
            height_px: MAX_HEIGHT_PX,
            font_rem,
            overflow,
        }
    }

    fn apply(&self, style: &CssStyleDeclaration) -> Result<(), JsValue> {
        style.set_property("height", &format!("{}px", self.height_px))?;
        style.set_property("font-size", &format!("{}rem", self.font_rem))?;
        style.set_property("overflow-y", self.overflow.as_css())?;
        Ok(())
    }
}

/// Grows the textarea with its content, then shrinks the font once it hits
/// the maximum height.
///
/// The font must be back at base size before measuring: a previously shrunk
/// font under-reports the height, the text then seems to fit, the font jumps
/// back to full size and overflows again on the next keystroke.
pub fn autosize(textarea: &HtmlTextAreaElement) -> Result<TextareaLayout, JsValue> {
    let style = textarea.style();
    style.set_property("height", "auto")?;
    style.set_property("overflow-y", "hidden")?;
    style.set_property("font-size", &format!("{}rem", BASE_FONT_REM))?;

    let natural_height = f64::from(textarea.scroll_height());
    let layout = TextareaLayout::for_natural_height(natural_height);
    layout.apply(&style)?;
    Ok(layout)
}

/// Drops the inline sizing so an emptied textarea returns to its stylesheet
/// look.
pub fn reset(textarea: &HtmlTextAreaElement) -> Result<(), JsValue> {
    let style = textarea.style();
    for property in ["height", "font-size", "overflow-y"] {
        style.remove_property(property)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_message_keeps_base_font() {
        let layout = TextareaLayout::for_natural_height(150.0);
        assert_eq!(layout.height_px, 150.0);
        assert_eq!(layout.font_rem, 2.5);
        assert_eq!(layout.overflow, Overflow::Hidden);
    }

    #[test]
    fn exactly_max_height_still_fits() {
        let layout = TextareaLayout::for_natural_height(300.0);
        assert_eq!(layout.height_px, 300.0);
        assert_eq!(layout.font_rem, 2.5);
    }

    #[test]
    fn long_message_clamps_font_and_scrolls() {
        let layout = TextareaLayout::for_natural_height(900.0);
        assert_eq!(layout.height_px, 300.0);
        assert_eq!(layout.font_rem, 1.0);
        assert_eq!(layout.overflow, Overflow::Auto);
    }

    #[test]
    fn moderate_overflow_shrinks_font_without_scrolling() {
        let layout = TextareaLayout::for_natural_height(400.0);
        assert_eq!(layout.height_px, 300.0);
        assert!((layout.font_rem - 1.875).abs() < 1e-9);
        assert_eq!(layout.overflow, Overflow::Hidden);
    }

    #[test]
    fn near_minimum_font_scrolls() {
        // 2.5 * 300 / 700 is about 1.07, inside the scroll margin
        let layout = TextareaLayout::for_natural_height(700.0);
        assert!(layout.font_rem > MIN_FONT_REM);
        assert_eq!(layout.overflow, Overflow::Auto);
    }

    proptest! {
        #[test]
        fn layout_stays_in_bounds(natural in 0.0f64..20_000.0) {
            let layout = TextareaLayout::for_natural_height(natural);
            prop_assert!(layout.height_px <= MAX_HEIGHT_PX);
            prop_assert!(layout.font_rem >= MIN_FONT_REM);
            prop_assert!(layout.font_rem <= BASE_FONT_REM);
            if layout.overflow == Overflow::Auto {
                prop_assert!(layout.font_rem <= MIN_FONT_REM + 0.1);
            }
        }

        #[test]
        fn font_never_grows_with_more_content(a in 0.0f64..5_000.0, b in 0.0f64..5_000.0) {
            let (small, large) = if a <= b { (a, b) } else { (b, a) };
            let fewer = TextareaLayout::for_natural_height(small);
            let more = TextareaLayout::for_natural_height(large);
            prop_assert!(more.font_rem <= fewer.font_rem);
        }
    }
}
