//! SVG output - a [`Surface`] that writes paths into an SVG document.
//!
//! Every stroked path becomes one `<path>` element carrying its own
//! stroke colour and opacity, in drawing order, so later segments sit on
//! top of earlier ones exactly like on a canvas.

use std::fmt::Write as _;

use crate::color::Rgba;
use crate::geometry::Point;
use crate::surface::Surface;

/// Default stroke width in user units.
const STROKE_WIDTH: f64 = 1.0;

/// Collects stroked paths and renders them as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    stroke_width: f64,
    background: Option<String>,
    stroke: Rgba,
    /// Path data of the path under construction.
    current: String,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stroke_width: STROKE_WIDTH,
            background: None,
            stroke: Rgba::opaque(0, 0, 0),
            current: String::new(),
            elements: Vec::new(),
        }
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Fill the canvas with `color` (any SVG colour) under the shell.
    ///
    /// The value is escaped for use inside an attribute.
    pub fn with_background(mut self, color: impl AsRef<str>) -> Self {
        self.background = Some(escape_attr(color.as_ref()));
        self
    }

    /// Number of `<path>` elements written so far.
    pub fn path_count(&self) -> usize {
        self.elements.len()
    }

    /// Render the document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
"#,
            w = self.width,
            h = self.height,
        );

        if let Some(background) = &self.background {
            let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="{}"/>"#, background);
        }

        let _ = writeln!(
            svg,
            r#"<g fill="none" stroke-width="{}" stroke-linejoin="round">"#,
            self.stroke_width
        );
        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

/// Escape `value` for a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Surface for SvgSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.elements.clear();
        self.current.clear();
    }

    fn begin_path(&mut self) {
        self.current.clear();
    }

    fn move_to(&mut self, p: Point) {
        let _ = write!(self.current, "M{:.2},{:.2} ", p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        let _ = write!(self.current, "L{:.2},{:.2} ", p.x, p.y);
    }

    fn bezier_curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        let _ = write!(
            self.current,
            "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2} ",
            c1.x, c1.y, c2.x, c2.y, to.x, to.y
        );
    }

    fn close_path(&mut self) {
        if !self.current.is_empty() {
            self.current.push_str("Z ");
        }
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn stroke(&mut self) {
        let data = self.current.trim_end();
        if data.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"  <path d="{}" stroke="{}" stroke-opacity="{:.3}"/>"#,
            data,
            self.stroke.to_hex(),
            self.stroke.opacity()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genes::snail;
    use crate::shell::Shell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_document_is_valid() {
        let svg = SvgSurface::new(10.0, 20.0).to_svg();
        assert!(svg.contains(r#"viewBox="0 0 10 20""#));
        assert!(usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok());
    }

    #[test]
    fn stroke_writes_one_path() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.begin_path();
        surface.set_stroke_color(Rgba::new(0xff, 0x00, 0x80, 0xbb));
        surface.move_to(Point::new(1.0, 2.0));
        surface.line_to(Point::new(3.5, 4.25));
        surface.stroke();
        surface.close_path();

        assert_eq!(surface.path_count(), 1);
        let svg = surface.to_svg();
        assert!(svg.contains(r#"d="M1.00,2.00 L3.50,4.25""#));
        assert!(svg.contains(r##"stroke="#ff0080""##));
        assert!(svg.contains(r#"stroke-opacity="0.733""#));
    }

    #[test]
    fn clear_drops_previous_paths() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.begin_path();
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(1.0, 1.0));
        surface.stroke();
        surface.clear(50.0, 40.0);
        assert_eq!(surface.path_count(), 0);
        assert!(surface.to_svg().contains(r#"width="50" height="40""#));
    }

    #[test]
    fn background_is_escaped() {
        let svg = SvgSurface::new(10.0, 10.0)
            .with_background(r#"red" onload="x<y&z"#)
            .to_svg();
        assert!(svg.contains(r#"fill="red&quot; onload=&quot;x&lt;y&amp;z""#));
        assert!(usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok());
    }

    #[test]
    fn full_shell_renders_to_parseable_svg() {
        let mut rng = StdRng::seed_from_u64(4);
        let shell = Shell::new(snail(), 500, 500).unwrap();
        let mut surface = SvgSurface::new(500.0, 500.0).with_background("white");
        let stats = shell.draw(&mut surface, &mut rng, false).unwrap();

        assert_eq!(surface.path_count(), stats.visited);
        let svg = surface.to_svg();
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
        assert!(!tree.root().children().is_empty());
    }
}
