// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the carousel widgets.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Arrow and indicator sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_carousel::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Inactive indicator segments.
    pub const INDICATOR_IDLE: f32 = 0.45;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Previous/next arrow buttons (square).
    pub const ARROW_BUTTON: f32 = 44.0;

    /// Dot indicator diameter.
    pub const DOT: f32 = 10.0;

    /// Line indicator segment length.
    pub const LINE_LENGTH: f32 = 24.0;

    /// Dash indicator segment length.
    pub const DASH_LENGTH: f32 = 12.0;

    /// Thickness of line and dash segments.
    pub const SEGMENT_THICKNESS: f32 = 4.0;

    /// Progress bar length along its axis.
    pub const PROGRESS_LENGTH: f32 = 160.0;

    /// Progress bar thickness.
    pub const PROGRESS_THICKNESS: f32 = 4.0;

    /// Hit area around indicator segments (WCAG 2.5.5 target size is 44).
    pub const SEGMENT_HIT: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Arrow glyphs.
    pub const ARROW: f32 = 22.0;

    /// Standard body - Fraction indicator, captions.
    pub const BODY: f32 = 14.0;

    /// Caption - Secondary text.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::INDICATOR_IDLE > 0.0 && opacity::INDICATOR_IDLE < 1.0);
    assert!(opacity::OVERLAY_PRESSED > opacity::OVERLAY_HOVER);
    assert!(opacity::OVERLAY_HOVER > opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::LINE_LENGTH > sizing::DASH_LENGTH);
    assert!(sizing::SEGMENT_HIT >= sizing::DOT);
    assert!(sizing::SEGMENT_HIT >= sizing::LINE_LENGTH);
};
