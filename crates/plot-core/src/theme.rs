// File: crates/plot-core/src/theme.rs
// Summary: Backend-neutral colors and light/dark theming for axes and labels.

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub tick: Color,
    pub axis_label: Color,
    /// Tick label size in device pixels.
    pub label_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::BLACK,
            tick: Color::BLACK,
            axis_label: Color::BLACK,
            label_size: 12.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            tick: Color::rgb(150, 150, 160),
            axis_label: Color::rgb(235, 235, 245),
            label_size: 12.0,
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::rgb(0x00, 0x2b, 0x36), // base03
            axis_line: Color::rgb(0x93, 0xa1, 0xa1),  // base1
            tick: Color::rgb(0x83, 0x94, 0x96),       // base0
            axis_label: Color::rgb(0xee, 0xe8, 0xd5), // base2
            label_size: 12.0,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::rgb(0xfd, 0xf6, 0xe3), // base3
            axis_line: Color::rgb(0x65, 0x7b, 0x83),  // base00
            tick: Color::rgb(0x58, 0x6e, 0x75),       // base01
            axis_label: Color::rgb(0x00, 0x2b, 0x36), // base03
            label_size: 12.0,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::BLACK,
            axis_line: Color::WHITE,
            tick: Color::rgb(0xcc, 0xcc, 0xcc),
            axis_label: Color::WHITE,
            label_size: 13.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
