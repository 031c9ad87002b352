// File: crates/figs-core/src/text.rs
// Summary: Text shaper over Skia textlayout with theme-supplied font stacks.

use skia_safe as skia;
use skia::textlayout::{
    FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle,
};

/// Measuring width for unconstrained single-line layouts.
const UNBOUNDED: f32 = 10_000.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, families: &[&str]) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(families);
        ts
    }

    pub fn layout(
        &self,
        text: &str,
        size: f32,
        color: skia::Color,
        families: &[&str],
        align: TextAlign,
        max_width: f32,
    ) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, families));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(max_width);
        paragraph
    }

    /// Width of the longest line and total height of `text` at `size`.
    pub fn measure(&self, text: &str, size: f32, families: &[&str]) -> (f32, f32) {
        let p = self.layout(
            text,
            size,
            skia::Color::TRANSPARENT,
            families,
            TextAlign::Left,
            UNBOUNDED,
        );
        (p.longest_line(), p.height())
    }

    /// Paint `text` with its horizontal center at `cx` and top edge at `top`,
    /// wrapping lines inside `box_width`.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        top: f32,
        size: f32,
        color: skia::Color,
        families: &[&str],
        box_width: f32,
    ) {
        let p = self.layout(text, size, color, families, TextAlign::Center, box_width);
        p.paint(canvas, (cx - box_width * 0.5, top));
    }

    /// Paint single-line `text` with its right edge at `right` and vertical
    /// center at `cy`.
    pub fn draw_right(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        right: f32,
        cy: f32,
        size: f32,
        color: skia::Color,
        families: &[&str],
    ) {
        let p = self.layout(text, size, color, families, TextAlign::Left, UNBOUNDED);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (right - w, cy - h * 0.5));
    }
}
