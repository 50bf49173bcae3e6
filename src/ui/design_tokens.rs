// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing step, size and font size used by the UI.

## Organization

- **Palette**: Base colors (slate neutrals plus one accent hue)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Backdrop of the photo viewer
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
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

    // Slate neutrals
    pub const SLATE_50: Color = Color::from_rgb(0.973, 0.980, 0.988);
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);
    pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941);
    pub const SLATE_300: Color = Color::from_rgb(0.796, 0.835, 0.882);
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722);
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const SLATE_600: Color = Color::from_rgb(0.278, 0.333, 0.412);
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_950: Color = Color::from_rgb(0.008, 0.024, 0.090);

    // Accent
    pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973);
    pub const INDIGO_500: Color = Color::from_rgb(0.388, 0.400, 0.945);
    pub const INDIGO_600: Color = Color::from_rgb(0.310, 0.275, 0.898);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    pub const MEDIUM: f32 = 0.5;
    pub const STRONG: f32 = 0.7;
    /// Backdrop behind the photo viewer.
    pub const BACKDROP: f32 = 0.9;
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
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Round previous/next/close buttons in the viewer.
    pub const VIEWER_CONTROL: f32 = 48.0;
    /// Bounds of the photo inside the viewer; the image keeps its ratio.
    pub const VIEWER_IMAGE_MAX_WIDTH: f32 = 1200.0;
    pub const VIEWER_IMAGE_MAX_HEIGHT: f32 = 720.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;

    pub const TILE_WIDTH: f32 = 288.0;
    pub const TILE_HEIGHT: f32 = 256.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 36.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: opacity::MEDIUM,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

/// Returns `color` with its alpha replaced.
#[must_use]
pub const fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
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
    assert!(opacity::BACKDROP > opacity::STRONG && opacity::BACKDROP < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(sizing::TILE_HEIGHT > sizing::VIEWER_CONTROL);
    assert!(sizing::VIEWER_IMAGE_MAX_WIDTH > sizing::TILE_WIDTH);
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
    fn with_alpha_keeps_rgb() {
        let faded = with_alpha(palette::INDIGO_500, 0.5);
        assert_eq!(faded.r, palette::INDIGO_500.r);
        assert_eq!(faded.a, 0.5);
    }
}
