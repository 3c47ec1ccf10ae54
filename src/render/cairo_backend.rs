use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    RectPrimitive, Renderer, Scene, Shape, TextAnchor, TextBaseline, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    /// Nodes skipped because their fill could not be parsed.
    pub fills_skipped: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, scene: &Scene) -> ChartResult<()>;
}

/// Cairo + Pango rasterizer for chart scenes.
///
/// Scene colors are free-form strings; fills this backend cannot parse are
/// skipped rather than guessed.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;

        context.set_source_rgba(1.0, 1.0, 1.0, 0.0);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for group in &scene.groups {
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            context.translate(group.offset_x, group.offset_y);
            for node in &group.nodes {
                match &node.shape {
                    Shape::Rect(rect) => {
                        if draw_rect(context, rect)? {
                            stats.rects_drawn += 1;
                        } else {
                            stats.fills_skipped += 1;
                        }
                    }
                    Shape::Text(text) => {
                        if draw_text(context, text) {
                            stats.texts_drawn += 1;
                        } else {
                            stats.fills_skipped += 1;
                        }
                    }
                }
            }
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, scene)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, scene: &Scene) -> ChartResult<()> {
        self.render_with_context(context, scene)
    }
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<bool> {
    let Some((red, green, blue, alpha)) = parse_css_color(&rect.fill) else {
        warn!(fill = %rect.fill, "skipping rect with unparseable fill");
        return Ok(false);
    };
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Ok(true);
    }

    append_rect_path(context, rect);
    context.set_source_rgba(red, green, blue, alpha);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    Ok(true)
}

fn draw_text(context: &Context, text: &TextPrimitive) -> bool {
    let Some(body_color) = parse_css_color(&text.fill) else {
        warn!(fill = %text.fill, "skipping text with unparseable fill");
        return false;
    };

    let font_description =
        FontDescription::from_string(&format!("{} {}", text.font_family, text.font_size_px));
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.display_text());
    let (total_width, total_height) = layout.pixel_size();

    let mut x = match text.anchor {
        TextAnchor::Start => text.x,
        TextAnchor::Middle => text.x - f64::from(total_width) / 2.0,
        TextAnchor::End => text.x - f64::from(total_width),
    };
    let y = match text.baseline {
        TextBaseline::Top => text.y,
        TextBaseline::Middle => text.y - f64::from(total_height) / 2.0,
        TextBaseline::Alphabetic => text.y - f64::from(total_height) * 0.8,
    };

    let runs = std::iter::once((text.text.as_str(), Some(body_color))).chain(
        text.spans
            .iter()
            .map(|span| (span.text.as_str(), parse_css_color(&span.fill))),
    );
    for (run, color) in runs {
        if run.is_empty() {
            continue;
        }
        let (red, green, blue, alpha) = color.unwrap_or(body_color);
        layout.set_text(run);
        context.set_source_rgba(red, green, blue, alpha);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
        x += f64::from(layout.pixel_size().0);
    }
    true
}

fn append_rect_path(context: &Context, rect: &RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

/// Parses `#rgb`, `#rrggbb`, `#rrggbbaa` and a few named colors into
/// normalized RGBA channels.
#[must_use]
pub fn parse_css_color(input: &str) -> Option<(f64, f64, f64, f64)> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        let digits = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        let channel = |value: u8| f64::from(value) / 255.0;
        return match hex.len() {
            3 => {
                let expand = |i: usize| digits(i..i + 1).map(|v| channel(v * 17));
                Some((expand(0)?, expand(1)?, expand(2)?, 1.0))
            }
            6 | 8 => {
                let red = channel(digits(0..2)?);
                let green = channel(digits(2..4)?);
                let blue = channel(digits(4..6)?);
                let alpha = if hex.len() == 8 {
                    channel(digits(6..8)?)
                } else {
                    1.0
                };
                Some((red, green, blue, alpha))
            }
            _ => None,
        };
    }

    let rgb = match input.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "orange" => (255, 165, 0),
        "yellow" => (255, 255, 0),
        "gray" | "grey" => (128, 128, 128),
        _ => return None,
    };
    Some((
        f64::from(rgb.0) / 255.0,
        f64::from(rgb.1) / 255.0,
        f64::from(rgb.2) / 255.0,
        1.0,
    ))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
