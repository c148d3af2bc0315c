//! CPU reference sink: rasterizes the primitive stream with `vello_cpu` and
//! exports PNG bytes.

use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::foundation::error::{GenoformError, GenoformResult};
use std::io::Cursor;

/// Flattening tolerance for stroke outline expansion.
const STROKE_TOLERANCE: f64 = 0.1;

/// A `vello_cpu`-backed [`crate::RenderSink`].
///
/// One sink owns one drawing surface; concurrent renders must each construct
/// their own.
pub struct CpuSink {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    path: BezPath,
}

impl CpuSink {
    /// Allocate a square drawing surface of `size` pixels per side.
    ///
    /// Fails with [`GenoformError::Render`] when the surface cannot be
    /// allocated (zero or above the pixmap coordinate limit); that failure is
    /// terminal for the render call.
    pub fn new(size: u32) -> GenoformResult<Self> {
        Self::with_dimensions(size, size)
    }

    /// Allocate a drawing surface with explicit dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> GenoformResult<Self> {
        if width == 0 || height == 0 {
            return Err(GenoformError::render("surface dimensions must be non-zero"));
        }
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| GenoformError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| GenoformError::render("surface height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx,
            path: BezPath::new(),
        })
    }

    fn paint_path(&mut self, path: &BezPath, color: Rgba8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }
}

impl crate::render::sink::RenderSink for CpuSink {
    fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to(p);
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.path.curve_to(c1, c2, p);
    }

    fn close_path(&mut self) {
        self.path.close_path();
    }

    fn fill(&mut self, color: Rgba8) -> GenoformResult<()> {
        let path = std::mem::take(&mut self.path);
        self.paint_path(&path, color);
        Ok(())
    }

    fn stroke(&mut self, color: Rgba8, width: f64) -> GenoformResult<()> {
        if width <= 0.0 || !width.is_finite() {
            return Err(GenoformError::render("stroke width must be positive"));
        }
        let path = std::mem::take(&mut self.path);
        // Expand the stroke to a fill outline so the backend only ever fills.
        let outline = kurbo::stroke(
            path.elements().iter().copied(),
            &kurbo::Stroke::new(width),
            &kurbo::StrokeOpts::default(),
            STROKE_TOLERANCE,
        );
        self.paint_path(&outline, color);
        Ok(())
    }

    fn export_image(&mut self) -> GenoformResult<Vec<u8>> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        let rgba = unpremultiply(pixmap.data_as_u8_slice());
        let img =
            image::RgbaImage::from_raw(u32::from(self.width), u32::from(self.height), rgba)
                .ok_or_else(|| GenoformError::render("pixmap buffer size mismatch"))?;

        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| GenoformError::render(format!("png encode failed: {e}")))?;
        Ok(buf)
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Premultiplied RGBA8 to straight alpha for PNG export.
fn unpremultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(premul.len());
    for px in premul.chunks_exact(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
        } else {
            let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
            out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), px[3]]);
        }
    }
    out
}
