use std::fmt::Write;

use crate::error::ChartResult;
use crate::render::{NodeClass, Renderer, Scene, SceneNode, Shape};

impl Scene {
    /// Serializes the scene as a standalone SVG document.
    ///
    /// Bars carry an `index` attribute with their dataset row, and colors are
    /// written exactly as supplied.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"{}\" width=\"{}\" height=\"{}\">",
            escape_text(&self.root_classes.join(" ")),
            self.viewport.width,
            self.viewport.height,
        );
        for group in &self.groups {
            let _ = write!(
                out,
                "<g class=\"{}\" transform=\"translate({}, {})\">",
                group.layer.class_name(),
                group.offset_x,
                group.offset_y,
            );
            for node in &group.nodes {
                write_node(&mut out, node);
            }
            out.push_str("</g>");
        }
        out.push_str("</svg>");
        out
    }
}

fn write_node(out: &mut String, node: &SceneNode) {
    match &node.shape {
        Shape::Rect(rect) => {
            let _ = write!(
                out,
                "<rect class=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                node.class.as_str(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            );
            if rect.corner_radius > 0.0 {
                let _ = write!(out, " rx=\"{0}\" ry=\"{0}\"", rect.corner_radius);
            }
            let _ = write!(out, " fill=\"{}\"", escape_text(&rect.fill));
            if let (NodeClass::Bar, Some(index)) = (node.class, node.datum_index) {
                let _ = write!(out, " index=\"{index}\"");
            }
            out.push_str("/>");
        }
        Shape::Text(text) => {
            let _ = write!(
                out,
                "<text class=\"{}\" x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}px\" fill=\"{}\" text-anchor=\"{}\" alignment-baseline=\"{}\">{}",
                node.class.as_str(),
                text.x,
                text.y,
                escape_text(&text.font_family),
                text.font_size_px,
                escape_text(&text.fill),
                text.anchor.as_str(),
                text.baseline.as_str(),
                escape_text(&text.text),
            );
            for span in &text.spans {
                let _ = write!(
                    out,
                    "<tspan class=\"{}\" fill=\"{}\">{}</tspan>",
                    escape_text(&span.class),
                    escape_text(&span.fill),
                    escape_text(&span.text),
                );
            }
            out.push_str("</text>");
        }
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renderer keeping the SVG document of the latest frame.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.document = scene.to_svg();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::escape_text;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_text("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
