// 🎨 Shared chart theme - dark background, bright categorical palette

use plotters::prelude::*;
use plotters::style::FontTransform;

/// Accent colors, one per chart family.
pub const LINE_YELLOW: RGBColor = RGBColor(0xFF, 0xE1, 0x35);
pub const BAR_GREEN: RGBColor = RGBColor(0x66, 0xFF, 0x99);
pub const BAR_PINK: RGBColor = RGBColor(0xFF, 0x66, 0xB2);
pub const COMBO_BLUE: RGBColor = RGBColor(0x66, 0x99, 0xFF);
pub const COMBO_ORANGE: RGBColor = RGBColor(0xFF, 0x99, 0x33);

/// Categorical palette for stacked segments and pie slices (husl-like hues).
pub const PALETTE: [RGBColor; 8] = [
    RGBColor(0xF7, 0x70, 0x89), // pink-red
    RGBColor(0xD5, 0x8C, 0x32), // amber
    RGBColor(0xA2, 0xA2, 0x26), // olive
    RGBColor(0x50, 0xB1, 0x31), // green
    RGBColor(0x34, 0xAE, 0x91), // teal
    RGBColor(0x37, 0xA9, 0xE1), // sky
    RGBColor(0xA4, 0x8C, 0xF4), // violet
    RGBColor(0xF4, 0x62, 0xDD), // magenta
];

/// Palette color for segment `i`, wrapping past the end.
pub fn palette_color(i: usize) -> RGBColor {
    PALETTE[i % PALETTE.len()]
}

/// Title style used for every chart caption.
pub fn title_style() -> TextStyle<'static> {
    ("sans-serif", 28).into_font().color(&WHITE)
}

/// Axis label / tick style.
pub fn label_style(size: u32) -> TextStyle<'static> {
    ("sans-serif", size).into_font().color(&WHITE)
}

/// Tick style rotated for long categorical labels.
pub fn rotated_label_style(size: u32) -> TextStyle<'static> {
    label_style(size).transform(FontTransform::Rotate90)
}

/// Dashed-gray mesh line look, approximated with a low-alpha white.
pub fn grid_line() -> RGBAColor {
    WHITE.mix(0.15)
}

// ============================================================================
// TESTS
// ============================================================================
