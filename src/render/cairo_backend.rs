use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, GroupHandle, LinePrimitive, LineStrokeStyle, RecordedPath, RecordingSurface, Shape,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoPaintStats {
    pub groups_painted: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub ellipses_drawn: usize,
    pub polygons_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Paints a recorded scene tree with Cairo + Pango + PangoCairo.
///
/// Works offscreen on its own image surface through [`CairoPainter::paint`],
/// or in place on an external context (for example a GTK `DrawingArea`
/// callback) through [`CairoPainter::paint_on_context`].
#[derive(Debug)]
pub struct CairoPainter {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoPaintStats,
}

impl CairoPainter {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidSize {
                width: f64::from(width),
                height: f64::from(height),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoPaintStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoPaintStats {
        self.last_stats
    }

    /// Paints onto the painter's own image surface.
    pub fn paint(&mut self, scene: &RecordingSurface) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.paint_on_context(&context, scene)
    }

    pub fn paint_on_context(
        &mut self,
        context: &Context,
        scene: &RecordingSurface,
    ) -> ChartResult<()> {
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoPaintStats::default();
        for root in scene.roots() {
            paint_group(context, scene, root, &mut stats)?;
        }
        self.last_stats = stats;
        Ok(())
    }
}

fn paint_group(
    context: &Context,
    scene: &RecordingSurface,
    handle: GroupHandle,
    stats: &mut CairoPaintStats,
) -> ChartResult<()> {
    let Some(group) = scene.group(handle) else {
        return Ok(());
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(group.translate.0, group.translate.1);

    for shape in &group.shapes {
        paint_shape(context, shape, stats)?;
    }
    for path in &group.paths {
        paint_path(context, path)?;
        stats.paths_drawn += 1;
    }
    for child in &group.children {
        paint_group(context, scene, *child, stats)?;
    }

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))?;
    stats.groups_painted += 1;
    Ok(())
}

fn paint_shape(context: &Context, shape: &Shape, stats: &mut CairoPaintStats) -> ChartResult<()> {
    match shape {
        Shape::Line(line) => {
            stroke_line(context, line)?;
            stats.lines_drawn += 1;
        }
        Shape::Rect(rect) => {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            fill(context, rect.fill_color, "failed to fill rectangle")?;
            stats.rects_drawn += 1;
        }
        Shape::Circle(circle) => {
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
            fill(context, circle.fill_color, "failed to fill circle")?;
            stats.circles_drawn += 1;
        }
        Shape::Ellipse(ellipse) => {
            if ellipse.rx > 0.0 && ellipse.ry > 0.0 {
                let matrix = context.matrix();
                context.translate(ellipse.cx, ellipse.cy);
                context.scale(ellipse.rx, ellipse.ry);
                context.new_sub_path();
                context.arc(0.0, 0.0, 1.0, 0.0, TAU);
                context.set_matrix(matrix);
                fill(context, ellipse.fill_color, "failed to fill ellipse")?;
            }
            stats.ellipses_drawn += 1;
        }
        Shape::Polygon(polygon) => {
            if let Some((&(x0, y0), rest)) = polygon.points.split_first() {
                context.move_to(x0, y0);
                for &(x, y) in rest {
                    context.line_to(x, y);
                }
                context.close_path();
                fill(context, polygon.fill_color, "failed to fill polygon")?;
            }
            stats.polygons_drawn += 1;
        }
        Shape::Text(text) => {
            show_text(context, text);
            stats.texts_drawn += 1;
        }
    }
    Ok(())
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    match line.stroke_style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { on_px, off_px } => context.set_dash(&[on_px, off_px], 0.0),
    }
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let result = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err));
    context.set_dash(&[], 0.0);
    result
}

fn paint_path(context: &Context, path: &RecordedPath) -> ChartResult<()> {
    let Some((&(x0, y0), rest)) = path.points.split_first() else {
        return Ok(());
    };
    apply_color(context, path.style.stroke_color);
    context.set_line_width(path.style.stroke_width);
    context.move_to(x0, y0);
    for &(x, y) in rest {
        context.line_to(x, y);
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke path", err))
}

fn show_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    apply_color(context, text.color);
    context.move_to(x, text.baseline_y() - baseline);
    pangocairo::functions::show_layout(context, &layout);
}

fn fill(context: &Context, color: Color, message: &str) -> ChartResult<()> {
    apply_color(context, color);
    context.fill().map_err(|err| map_backend_error(message, err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
