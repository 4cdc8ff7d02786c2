// File: crates/closeline-core/src/theme.rs
// Summary: Light/Dark theming for chart colors.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub tick: Rgba,
    pub accent: Rgba,
    pub crosshair: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 255, 255, 255),
            grid: Rgba::from_argb(255, 230, 230, 235),
            tick: Rgba::from_argb(255, 128, 128, 128),
            accent: Rgba::from_argb(255, 53, 168, 83),
            crosshair: Rgba::from_argb(77, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Rgba::from_argb(255, 40, 40, 45),
            tick: Rgba::from_argb(255, 150, 150, 160),
            accent: Rgba::from_argb(255, 64, 200, 110),
            crosshair: Rgba::from_argb(90, 255, 255, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
