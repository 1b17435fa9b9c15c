//! SVG outline rendering of a mesh.
//!
//! The document stretches to its container (`preserveAspectRatio="none"`)
//! and is hidden from assistive tech, as fits a decorative background.

use std::fmt::Write as _;

use crate::mesh::TriangleMesh;

#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
    /// Optional full-viewport backdrop drawn beneath the outlines.
    pub background: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "white".to_string(),
            stroke_width: 1.0,
            fill: "none".to_string(),
            background: Some("#3b82f6".to_string()),
        }
    }
}

/// Render one `<polygon>` per triangle, in mesh order.
pub fn render_svg(mesh: &TriangleMesh, width: f64, height: f64, style: &SvgStyle) -> String {
    let mut out = String::with_capacity(256 + mesh.len() * 96);
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" preserveAspectRatio="none" aria-hidden="true">"#
    );
    if let Some(bg) = &style.background {
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
            escape(bg)
        );
    }
    let fill = escape(&style.fill);
    let stroke = escape(&style.stroke);
    for tri in mesh {
        let _ = writeln!(
            out,
            r#"  <polygon points="{}" fill="{fill}" stroke="{stroke}" stroke-width="{}"/>"#,
            tri.svg_points(),
            style.stroke_width
        );
    }
    out.push_str("</svg>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_mesh;
    use nalgebra::vector;

    #[test]
    fn renders_one_polygon_per_triangle() {
        let pts = vec![vector![0.0, 0.0], vector![10.0, 0.0], vector![0.0, 10.0]];
        let mesh = build_mesh(&pts);
        let svg = render_svg(&mesh, 1000.0, 400.0, &SvgStyle::default());
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"viewBox="0 0 1000 400""#));
        assert!(svg.contains(r#"preserveAspectRatio="none""#));
        assert!(svg.contains(r##"fill="#3b82f6""##));
        assert_eq!(svg.matches("<polygon ").count(), 1);
        assert!(svg.contains(
            r#"<polygon points="0,0 10,0 0,10" fill="none" stroke="white" stroke-width="1"/>"#
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn empty_mesh_without_background() {
        let style = SvgStyle {
            background: None,
            ..SvgStyle::default()
        };
        let svg = render_svg(&TriangleMesh::default(), 10.0, 5.0, &style);
        assert!(!svg.contains("<rect"));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn style_strings_are_escaped() {
        let style = SvgStyle {
            stroke: r#"red" onload="x"#.to_string(),
            ..SvgStyle::default()
        };
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let svg = render_svg(&build_mesh(&pts), 1.0, 1.0, &style);
        assert!(svg.contains(r#"stroke="red&quot; onload=&quot;x""#));
    }
}
