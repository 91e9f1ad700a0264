// SPDX-License-Identifier: MPL-2.0
//! Design tokens used by the toast widget.
//!
//! Only the scales the toast card consumes are defined here: severity
//! palette, overlay opacities, the 8px spacing grid, card sizing, the two
//! text sizes, and the border/radius/shadow treatment of the card.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Severity accents
    pub const ERROR_500: Color = Color::from_rgb(0.741, 0.212, 0.184);
    pub const WARNING_500: Color = Color::from_rgb(0.973, 0.580, 0.024);
    pub const SUCCESS_500: Color = Color::from_rgb(0.318, 0.639, 0.318);
    pub const INFO_500: Color = Color::from_rgb(0.184, 0.588, 0.706);
}

pub mod opacity {
    /// Dismiss button hover backdrop
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Dismiss button pressed backdrop, disabled text
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Progress track background behind the remaining-time bar
    pub const TRACK: f32 = 0.15;
}

/// Spacing scale on the 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

pub mod sizing {
    /// Dismiss glyph size
    pub const ICON_SM: f32 = 16.0;
    /// Fixed card width
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Remaining-time bar height
    pub const PROGRESS_TRACK: f32 = 4.0;
}

pub mod typography {
    /// Title line
    pub const BODY: f32 = 14.0;
    /// Message body
    pub const BODY_SM: f32 = 13.0;
}

pub mod border {
    /// Severity accent border of the card
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

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

const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM && spacing::SM < spacing::MD);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::SM, spacing::XS * 1.5);
    }

    #[test]
    fn severity_palette_is_distinct() {
        let colors = [
            palette::SUCCESS_500,
            palette::INFO_500,
            palette::WARNING_500,
            palette::ERROR_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
