// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every screen and modal.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use budget_desk::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Backdrop behind a modal dialog
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
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_400: Color = Color::from_rgb(0.937, 0.353, 0.337);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_600: Color = Color::from_rgb(0.776, 0.157, 0.157);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Dimmed application content behind a modal.
    pub const BACKDROP: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const SPINNER: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const NAVBAR_HEIGHT: f32 = 52.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 26.0;

    /// Dialog titles
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Secondary labels, amounts
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
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
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
