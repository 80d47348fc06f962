// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! All color, spacing, type, and shadow constants live here so the styles
//! and views never hard-code values. The spacing scale sits on an 8px grid
//! with a 4px half-step; the compile-time block at the bottom keeps the
//! scales ordered when someone retunes them.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Neutral scale, dark to light
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.12, 0.13);
    pub const GRAY_700: Color = Color::from_rgb(0.27, 0.28, 0.30);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.46, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.76, 0.77, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.87, 0.88, 0.89);

    // Brand blues, used for selection and links
    pub const PRIMARY_400: Color = Color::from_rgb(0.20, 0.58, 0.80);
    pub const PRIMARY_500: Color = Color::from_rgb(0.01, 0.45, 0.71);
    pub const PRIMARY_600: Color = Color::from_rgb(0.01, 0.36, 0.57);

    // Status colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.04, 0.53, 0.29);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.60, 0.10);
    pub const ERROR_500: Color = Color::from_rgb(0.87, 0.18, 0.19);
    pub const INFO_500: Color = Color::from_rgb(0.35, 0.62, 0.95);
}

pub mod opacity {
    /// Hover washes over flat buttons.
    pub const OVERLAY_SUBTLE: f32 = 0.15;
    /// Pressed washes and dimmed foregrounds.
    pub const OVERLAY_MEDIUM: f32 = 0.45;
    /// The backdrop behind modal cards.
    pub const OVERLAY_STRONG: f32 = 0.75;
    /// Pressed state of translucent overlay buttons.
    pub const OVERLAY_PRESSED: f32 = 0.85;
    /// Semi-transparent panel surfaces.
    pub const SURFACE: f32 = 0.92;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const TOAST_WIDTH: f32 = 340.0;
    /// Width of the attempt picker in the header row.
    pub const VERSION_PICKER_WIDTH: f32 = 220.0;

    pub const PREVIEW_MAX_HEIGHT: f32 = 360.0;
    pub const OVERLAY_CARD_WIDTH: f32 = 480.0;
    pub const OVERLAY_CARD_MAX_HEIGHT: f32 = 420.0;
}

pub mod typography {
    //! Type scale, in logical pixels. Two title steps cover the assignment
    //! heading and section headers; body steps cover everything else down
    //! to badge captions.

    /// Assignment name in the header.
    pub const TITLE_MD: f32 = 20.0;
    /// Section headers inside the drawer.
    pub const TITLE_SM: f32 = 18.0;
    /// Emphasis text and the toast dismiss glyph.
    pub const BODY_LG: f32 = 16.0;
    /// Default for labels and content.
    pub const BODY: f32 = 14.0;
    /// Secondary rows such as the course subtitle and timestamps.
    pub const BODY_SM: f32 = 13.0;
    /// Badges and fine print.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Accent borders on toasts and selected cards.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pill shape for rating buttons and status badges.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// Scale ordering, checked at compile time.
const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_PRESSED);
    assert!(opacity::SURFACE < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::OVERLAY_CARD_WIDTH > sizing::TOAST_WIDTH);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(radius::SM < radius::MD);
    assert!(radius::MD < radius::LG);
};
