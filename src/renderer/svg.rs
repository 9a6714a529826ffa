//! SVG generation for kite diagrams

use crate::layout::{anchor_for, DiagramConfig, KiteGeometry, TextAnchor, TextRole, Wedge};
use crate::stylesheet::{Stylesheet, FILL, FONT_FAMILY, STROKE, STROKE_WIDTH, TEXT};
use crate::words::{WedgeWords, WordTable};

use super::path::{fmt_num, ResolvedPath};
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add the CSS rule for word text
    ///
    /// Stylesheet values are escaped when the document is built.
    pub fn add_word_style(&mut self, font_size: u32, stylesheet: &Stylesheet) {
        let prefix = self.prefix();
        self.styles.push(format!(
            ".{}word {{ font: {}px {}; fill: {}; }}",
            prefix,
            font_size,
            stylesheet.resolve_or_default(FONT_FAMILY),
            stylesheet.resolve_or_default(TEXT),
        ));
    }

    pub fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a path element
    ///
    /// `styles` holds attribute name/value pairs; values are escaped here.
    pub fn add_path(
        &mut self,
        id: Option<&str>,
        d: &str,
        classes: &[String],
        styles: &[(&str, String)],
    ) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let styles: String = styles
            .iter()
            .map(|(name, value)| format!(r#" {}="{}""#, name, escape_xml(value)))
            .collect();
        let class_attr = class_attr(classes);

        self.elements.push(format!(
            r#"{}<path{}{} d="{}"{}/>"#,
            self.indent_str(),
            id_attr,
            class_attr,
            d,
            styles
        ));
    }

    /// Add a text element, vertically centered on `y`
    pub fn add_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        anchor: TextAnchor,
        classes: &[String],
        transform: Option<&str>,
    ) {
        let transform_attr = transform
            .map(|t| format!(r#" transform="{}""#, t))
            .unwrap_or_default();

        self.elements.push(format!(
            r#"{}<text{} x="{}" y="{}" text-anchor="{}" dominant-baseline="middle"{}>{}</text>"#,
            self.indent_str(),
            class_attr(classes),
            fmt_num(x),
            fmt_num(y),
            anchor.as_str(),
            transform_attr,
            escape_xml(text)
        ));
    }

    /// Open a group element with optional ID, classes and transform
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String], transform: Option<&str>) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let transform_attr = transform
            .map(|t| format!(r#" transform="{}""#, t))
            .unwrap_or_default();

        self.elements.push(format!(
            "{}<g{}{}{}>",
            self.indent_str(),
            id_attr,
            class_attr(classes),
            transform_attr
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string on a square canvas centered at the origin
    pub fn build(self, canvas_size: f64) -> String {
        let half = fmt_num(-canvas_size / 2.0);
        let size = fmt_num(canvas_size);
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="{} {} {} {}">"#,
            half, half, size, size
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(&escape_xml(style));
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a word table to an SVG string
///
/// `geometry` must have been computed for `table.len()` wedges.
pub fn render_svg(
    table: &WordTable,
    geometry: &KiteGeometry,
    diagram: &DiagramConfig,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    debug_assert_eq!(geometry.wedge_count, table.len());
    let mut builder = SvgBuilder::new(config.clone());

    builder.add_word_style(diagram.font_size, stylesheet);

    let outline = ResolvedPath::kite(geometry).to_svg_d();
    let outline_styles = [
        ("stroke", stylesheet.resolve_or_default(STROKE)),
        ("stroke-width", stylesheet.resolve_or_default(STROKE_WIDTH)),
        ("fill", stylesheet.resolve_or_default(FILL)),
    ];

    for (wedge, words) in geometry.wedges().zip(table.iter()) {
        log::trace!(
            "wedge {} at {}°: inner={:?} outer={:?} sub={:?}",
            wedge.index,
            wedge.rotation,
            words.inner,
            words.outer,
            words.sub
        );
        render_wedge(&mut builder, geometry, wedge, words, &outline, &outline_styles);
    }

    builder.build(geometry.canvas_size)
}

/// Render one wedge: its outline and up to three words
fn render_wedge(
    builder: &mut SvgBuilder,
    geometry: &KiteGeometry,
    wedge: Wedge,
    words: &WedgeWords,
    outline: &str,
    outline_styles: &[(&str, String)],
) {
    let prefix = builder.prefix();
    let class = |name: &str| format!("{}{}", prefix, name);

    // The first wedge sits at the reference position and needs no transform
    let rotation = (wedge.index > 0).then(|| format!("rotate({})", fmt_num(wedge.rotation)));
    let wedge_id = format!("wedge{}", wedge.index);
    builder.start_group(Some(&wedge_id), &[class("wedge")], rotation.as_deref());

    let kite_id = format!("kite{}", wedge.index);
    builder.add_path(Some(&kite_id), outline, &[class("outline")], outline_styles);

    // Words are laid out in a frame whose origin is the kite tip
    let to_tip = format!("translate({},0)", fmt_num(geometry.outer_radius));
    builder.start_group(None, &[], Some(&to_tip));
    add_word(
        builder,
        geometry,
        &words.inner,
        wedge.rotation,
        TextRole::Inner,
        &class("inner"),
        &prefix,
    );
    if !words.outer.is_empty() {
        add_word(
            builder,
            geometry,
            &words.outer,
            wedge.rotation,
            TextRole::Outer,
            &class("outer"),
            &prefix,
        );
    }
    builder.end_group();

    if !words.sub.is_empty() {
        let to_sub = format!("rotate({}) {}", fmt_num(geometry.angle_deg / 2.0), to_tip);
        builder.start_group(None, &[], Some(&to_sub));
        add_word(
            builder,
            geometry,
            &words.sub,
            wedge.sub_rotation,
            TextRole::Sub,
            &class("sub"),
            &prefix,
        );
        builder.end_group();
    }

    builder.end_group();
}

/// Add a word anchored by the half-plane rule for `rotation`
fn add_word(
    builder: &mut SvgBuilder,
    geometry: &KiteGeometry,
    text: &str,
    rotation: f64,
    role: TextRole,
    role_class: &str,
    prefix: &str,
) {
    let placement = anchor_for(rotation, role);
    let classes = [format!("{}word", prefix), role_class.to_string()];
    let flip = placement.flipped.then_some("rotate(180)");
    builder.add_text(
        text,
        placement.x(geometry.brim),
        0.0,
        placement.anchor,
        &classes,
        flip,
    );
}

fn class_attr(classes: &[String]) -> String {
    if classes.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, escape_xml(&classes.join(" ")))
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
