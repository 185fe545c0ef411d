use ratatui::style::Color;

use crate::preference::ColorMode;

/// Colors consumed by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub separator: Color,
    pub highlight: Color,
    pub skeleton: Color,
    pub placeholder: Color,
    pub error: Color,
    pub error_bg: Color,
    pub ok: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x1a, 0x20, 0x2c),
    text: Color::Rgb(0xf7, 0xfa, 0xfc),
    text_dim: Color::Rgb(0xa0, 0xae, 0xc0),
    accent: Color::Rgb(0x63, 0xb3, 0xed),
    border: Color::Rgb(0x4a, 0x55, 0x68),
    separator: Color::Rgb(0x6b, 0x72, 0x80),
    highlight: Color::Rgb(0x2d, 0x37, 0x48),
    skeleton: Color::Rgb(0x4a, 0x55, 0x68),
    placeholder: Color::Rgb(0x2d, 0x37, 0x48),
    error: Color::Rgb(0xfe, 0xb2, 0xb2),
    error_bg: Color::Rgb(0x74, 0x2a, 0x2a),
    ok: Color::Rgb(0x22, 0xc5, 0x5e),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xff, 0xff, 0xff),
    text: Color::Rgb(0x1a, 0x20, 0x2c),
    text_dim: Color::Rgb(0x71, 0x80, 0x96),
    accent: Color::Rgb(0x31, 0x82, 0xce),
    border: Color::Rgb(0xe2, 0xe8, 0xf0),
    separator: Color::Rgb(0xa0, 0xae, 0xc0),
    highlight: Color::Rgb(0xed, 0xf2, 0xf7),
    skeleton: Color::Rgb(0xe2, 0xe8, 0xf0),
    placeholder: Color::Rgb(0xed, 0xf2, 0xf7),
    error: Color::Rgb(0x9b, 0x2c, 0x2c),
    error_bg: Color::Rgb(0xfe, 0xd7, 0xd7),
    ok: Color::Rgb(0x2f, 0x85, 0x5a),
};

/// Theme handed down the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeContext {
    pub mode: ColorMode,
    pub palette: Palette,
}

impl ThemeContext {
    pub fn new(mode: ColorMode) -> Self {
        let palette = match mode {
            ColorMode::Dark => DARK,
            ColorMode::Light => LIGHT,
        };
        Self { mode, palette }
    }
}
