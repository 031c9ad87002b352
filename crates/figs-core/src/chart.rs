// File: crates/figs-core/src/chart.rs
// Summary: Bar chart renderer: headless PNG/RGBA pipeline on Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::ValueAxis;
use crate::category::Category;
use crate::scale::{BandScale, ValueScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{FigSize, Insets, DEFAULT_DPI};
use crate::wrap;

/// Fraction of each categorical band covered by its bar.
const BAR_FRACTION: f32 = 0.8;

/// Explicit per-render configuration; nothing here is process-global.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Override the derived figure size (its own dpi wins); None sizes the
    /// figure from the bar count at `dpi`.
    pub size: Option<FigSize>,
    pub dpi: f32,
    pub theme: Theme,
    /// Wrap width for x tick labels, in characters.
    pub label_wrap: usize,
    /// Draw title/labels/tick text. Off for deterministic snapshots.
    pub draw_labels: bool,
    /// Draw the per-bar count annotations.
    pub annotate: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: None,
            dpi: DEFAULT_DPI,
            theme: Theme::paper(),
            label_wrap: 12,
            draw_labels: true,
            annotate: true,
        }
    }
}

/// One category rendered as a vertical bar chart with a fixed value axis.
pub struct BarChart {
    pub category: Category,
    pub y_axis: ValueAxis,
}

impl BarChart {
    pub fn new(category: Category) -> Self {
        Self { category, y_axis: ValueAxis::paper_count() }
    }

    pub fn with_y_axis(mut self, y_axis: ValueAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    fn fig_size(&self, opts: &RenderOptions) -> FigSize {
        opts.size
            .unwrap_or_else(|| FigSize::for_bar_count(self.category.len(), opts.dpi))
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Render to PNG bytes in memory using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let size = self.fig_size(opts);
        let mut surface = skia::surfaces::raster_n32_premul((size.width_px(), size.height_px()))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts, size);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let size = self.fig_size(opts);
        let (w, h) = (size.width_px(), size.height_px());
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts, size);

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back rendered pixels");
        }
        Ok((pixels, w, h, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, size: FigSize) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let insets = Insets::for_dpi(size.dpi);
        let plot_left = insets.left as f32;
        let plot_top = insets.top as f32;
        let plot_right = size.width_px() as f32 - insets.right as f32;
        let plot_bottom = size.height_px() as f32 - insets.bottom as f32;

        let y_scale = ValueScale::new(plot_top, plot_bottom, self.y_axis.min, self.y_axis.max);
        let bands = BandScale::new(plot_left, plot_right, self.category.len());
        let shaper = TextShaper::new();

        draw_bars(canvas, theme, &self.category, &bands, &y_scale);
        // Only the left and bottom spines are drawn; top and right stay bare.
        draw_spines(canvas, theme, size, plot_left, plot_top, plot_right, plot_bottom);
        draw_y_ticks(
            canvas,
            theme,
            &shaper,
            size,
            &self.y_axis,
            &y_scale,
            plot_left,
            opts.draw_labels,
        );
        draw_x_ticks(canvas, theme, size, &bands, plot_bottom);

        if opts.draw_labels && opts.annotate {
            draw_annotations(canvas, theme, &shaper, size, &self.category, &bands, &y_scale);
        }
        if opts.draw_labels {
            draw_x_labels(
                canvas,
                theme,
                &shaper,
                size,
                &self.category,
                &bands,
                plot_bottom,
                opts.label_wrap,
            );
            draw_title(
                canvas,
                theme,
                &shaper,
                size,
                self.category.name(),
                plot_left,
                plot_right,
                plot_top,
            );
            draw_y_label(
                canvas,
                theme,
                &shaper,
                size,
                &self.y_axis.label,
                plot_left,
                plot_top,
                plot_bottom,
            );
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

fn draw_bars(
    canvas: &skia::Canvas,
    theme: &Theme,
    category: &Category,
    bands: &BandScale,
    scale: &ValueScale,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(theme.bar_fill);

    let half = bands.bar_half_width(BAR_FRACTION);
    let base = scale.to_px_clamped(0.0);
    for (i, (_, count)) in category.rows().enumerate() {
        // Clamped: a count past the axis ceiling clips at the plot top.
        let top = scale.to_px_clamped(f64::from(count));
        if top >= base {
            continue; // zero-height bar: nothing to fill, annotation still applies
        }
        let cx = bands.center(i);
        let rect = skia::Rect::from_ltrb(cx - half, top, cx + half, base);
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_spines(
    canvas: &skia::Canvas,
    theme: &Theme,
    size: FigSize,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.spine);
    paint.set_anti_alias(true);
    paint.set_stroke_width(size.pt(1.0));

    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_y_ticks(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    size: FigSize,
    axis: &ValueAxis,
    scale: &ValueScale,
    left: f32,
    draw_labels: bool,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.tick);
    paint.set_anti_alias(true);
    paint.set_stroke_width(size.pt(0.8));

    let tick_len = size.pt(3.5);
    for v in axis.ticks() {
        let vy = scale.to_px(v);
        canvas.draw_line((left, vy), (left - tick_len, vy), &paint);
        if draw_labels {
            shaper.draw_right(
                canvas,
                &format_tick(v),
                left - tick_len - size.pt(2.0),
                vy,
                size.pt(10.0),
                theme.tick_label,
                theme.font_families,
            );
        }
    }
}

fn draw_x_ticks(
    canvas: &skia::Canvas,
    theme: &Theme,
    size: FigSize,
    bands: &BandScale,
    bottom: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.tick);
    paint.set_anti_alias(true);
    paint.set_stroke_width(size.pt(0.8));

    let tick_len = size.pt(3.5);
    for i in 0..bands.bands {
        let cx = bands.center(i);
        canvas.draw_line((cx, bottom), (cx, bottom + tick_len), &paint);
    }
}

fn draw_annotations(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    size: FigSize,
    category: &Category,
    bands: &BandScale,
    scale: &ValueScale,
) {
    for (i, (_, count)) in category.rows().enumerate() {
        let text = count.to_string();
        let (_, h) = shaper.measure(&text, size.pt(9.0), theme.font_families);
        let bar_top = scale.to_px_clamped(f64::from(count));
        // Bottom of the number sits two points above the (possibly clipped) bar top.
        shaper.draw_centered(
            canvas,
            &text,
            bands.center(i),
            bar_top - size.pt(2.0) - h,
            size.pt(9.0),
            theme.annotation,
            theme.font_families,
            bands.band_width(),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_x_labels(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    size: FigSize,
    category: &Category,
    bands: &BandScale,
    bottom: f32,
    wrap_width: usize,
) {
    let top = bottom + size.pt(3.5) + size.pt(3.0);
    for (i, (label, _)) in category.rows().enumerate() {
        let wrapped = wrap::fill(label, wrap_width);
        shaper.draw_centered(
            canvas,
            &wrapped,
            bands.center(i),
            top,
            size.pt(10.0),
            theme.tick_label,
            theme.font_families,
            bands.band_width(),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_title(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    size: FigSize,
    title: &str,
    left: f32,
    right: f32,
    top: f32,
) {
    let (_, h) = shaper.measure(title, size.pt(12.0), theme.font_families);
    shaper.draw_centered(
        canvas,
        title,
        (left + right) * 0.5,
        top - size.pt(10.0) - h,
        size.pt(12.0),
        theme.title,
        theme.font_families,
        right - left,
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_y_label(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    size: FigSize,
    label: &str,
    left: f32,
    top: f32,
    bottom: f32,
) {
    let (w, h) = shaper.measure(label, size.pt(11.0), theme.font_families);
    let cx = left - size.pt(34.0);
    let cy = (top + bottom) * 0.5;
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
    shaper.draw_centered(
        canvas,
        label,
        cx,
        cy - h * 0.5,
        size.pt(11.0),
        theme.axis_label,
        theme.font_families,
        w,
    );
    canvas.restore();
}
