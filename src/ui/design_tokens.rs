// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing and size the views use.

## Organization

- **Palette**: Base colors of the FishEye brand
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use fisheye::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::WHITE
};
let padding = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.32, 0.32, 0.32); // #525252
    pub const GRAY_400: Color = Color::from_rgb(0.46, 0.46, 0.46); // #757575
    pub const GRAY_100: Color = Color::from_rgb(0.98, 0.98, 0.98); // #FAFAFA

    // Brand
    pub const BRAND_700: Color = Color::from_rgb(0.565, 0.11, 0.11); // #901C1C
    pub const BRAND_500: Color = Color::from_rgb(0.827, 0.341, 0.235); // #D3573C
    pub const BRAND_200: Color = Color::from_rgb(0.859, 0.533, 0.463); // #DB8876

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Levels
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    pub const PORTRAIT: f32 = 200.0;
    pub const PORTRAIT_HEADER: f32 = 160.0;

    pub const CARD_WIDTH: f32 = 350.0;
    pub const CARD_MEDIA_HEIGHT: f32 = 300.0;

    pub const CLOSEUP_MAX_WIDTH: f32 = 1050.0;
    pub const CLOSEUP_MEDIA_HEIGHT: f32 = 700.0;
    pub const CLOSEUP_CONTROL: f32 = 48.0;

    pub const MODAL_WIDTH: f32 = 670.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const SORT_PICKER_WIDTH: f32 = 170.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 64.0;
    pub const TITLE_LG: f32 = 36.0;
    pub const TITLE_MD: f32 = 24.0;
    pub const TITLE_SM: f32 = 20.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Width Scale
// ============================================================================

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
    /// Outline drawn around the focused card.
    pub const FOCUS_RING: f32 = 3.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 5.0;
    pub const MD: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

/// Backdrop drawn behind the closeup and the contact modal.
#[must_use]
pub fn backdrop() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::WHITE
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CLOSEUP_MAX_WIDTH > sizing::CARD_WIDTH);
    assert!(border::FOCUS_RING > border::WIDTH_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn backdrop_is_translucent() {
        let color = backdrop();
        assert!(color.a > opacity::TRANSPARENT && color.a < opacity::OPAQUE);
    }
}
