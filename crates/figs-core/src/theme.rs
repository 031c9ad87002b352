// File: crates/figs-core/src/theme.rs
// Summary: Named styling presets for figure rendering.

use skia_safe as skia;

const SERIF: &[&str] = &["Times New Roman", "Times", "DejaVu Serif", "Georgia", "serif"];
const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Colors and font stack for one figure. Carried inside `RenderOptions`;
/// never process-global.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub spine: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub bar_fill: skia::Color,
    pub annotation: skia::Color,
    pub font_families: &'static [&'static str],
}

impl Theme {
    /// Journal-figure default: white background, serif text, muted blue bars.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::WHITE,
            spine: skia::Color::from_argb(255, 40, 40, 45),
            tick: skia::Color::from_argb(255, 60, 60, 65),
            tick_label: skia::Color::from_argb(255, 35, 35, 40),
            axis_label: skia::Color::from_argb(255, 25, 25, 30),
            title: skia::Color::from_argb(255, 15, 15, 20),
            bar_fill: skia::Color::from_argb(255, 76, 114, 176),
            annotation: skia::Color::from_argb(255, 25, 25, 30),
            font_families: SERIF,
        }
    }

    /// Sans-serif variant of the paper theme for screen-first documents.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            spine: skia::Color::from_argb(255, 60, 60, 70),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            tick_label: skia::Color::from_argb(255, 45, 45, 55),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 20, 20, 30),
            bar_fill: skia::Color::from_argb(255, 40, 120, 200),
            annotation: skia::Color::from_argb(255, 20, 20, 30),
            font_families: SANS,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            spine: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            bar_fill: skia::Color::from_argb(255, 96, 156, 255),
            annotation: skia::Color::from_argb(255, 235, 235, 245),
            font_families: SANS,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to paper.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::paper()
}
