use crate::config::{LayoutConfig, RenderConfig};
use crate::layout::{Layout, NodeLayout, NodeRole, TextBlock};
use crate::theme::{BoxStyle, Theme};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub fn render_svg(layout: &Layout, theme: &Theme, config: &LayoutConfig) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    for edge in &layout.edges {
        let d = points_to_path(&edge.points);
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.4\"/>",
            d, theme.line_color
        ));
    }

    for node in layout.nodes.values() {
        let style = node_style(node, theme);
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{rx}\" ry=\"{rx}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
            node.x,
            node.y,
            node.width,
            node.height,
            style.fill,
            theme.border_color,
            rx = config.corner_radius,
        ));
        svg.push_str(&text_block_svg(
            node.center_x(),
            node.center_y(),
            &node.label,
            node_font_size(node, theme),
            &style.text_color,
            node.bold,
            theme,
            config,
        ));
    }

    for label in &layout.row_labels {
        svg.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\" transform=\"rotate(-90 {x:.2} {y:.2})\">{}</text>",
            escape_xml(&theme.font_family),
            theme.row_label_font_size,
            theme.row_label_color,
            escape_xml(&label.text),
            x = label.x,
            y = label.y,
        ));
    }

    svg.push_str("</svg>");
    debug!(bytes = svg.len(), "rendered svg");
    svg
}

fn node_style<'a>(node: &NodeLayout, theme: &'a Theme) -> &'a BoxStyle {
    match node.role {
        NodeRole::TopKpi => &theme.top_kpi,
        NodeRole::Owner => &theme.owner,
        NodeRole::Category => &theme.category,
        NodeRole::Metric => &theme.metric,
        NodeRole::Subcategory(kind) => theme.subcategory_style(kind),
    }
}

fn node_font_size(node: &NodeLayout, theme: &Theme) -> f32 {
    match node.role {
        NodeRole::TopKpi => theme.top_kpi_font_size,
        NodeRole::Owner => theme.owner_font_size,
        NodeRole::Category => theme.category_font_size,
        NodeRole::Metric => theme.metric_font_size,
        NodeRole::Subcategory(_) => theme.subcategory_font_size,
    }
}

fn points_to_path(points: &[(f32, f32)]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    d.push_str(&format!("M {:.2} {:.2}", points[0].0, points[0].1));
    for point in points.iter().skip(1) {
        d.push_str(&format!(" L {:.2} {:.2}", point.0, point.1));
    }
    d
}

#[allow(clippy::too_many_arguments)]
fn text_block_svg(
    x: f32,
    y: f32,
    label: &TextBlock,
    font_size: f32,
    fill: &str,
    bold: bool,
    theme: &Theme,
    config: &LayoutConfig,
) -> String {
    let line_height = font_size * config.label_line_height;
    let total_height = label.lines.len() as f32 * line_height;
    // First baseline so the block centers on y.
    let start_y = y - total_height / 2.0 + font_size;
    let weight = if bold { " font-weight=\"bold\"" } else { "" };

    let mut text = String::new();
    text.push_str(&format!(
        "<text x=\"{x:.2}\" y=\"{start_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{font_size}\"{weight} fill=\"{fill}\">",
        escape_xml(&theme.font_family),
    ));

    for (idx, line) in label.lines.iter().enumerate() {
        let dy = if idx == 0 {
            "0".to_string()
        } else {
            format!("{line_height:.2}")
        };
        text.push_str(&format!(
            "<tspan x=\"{x:.2}\" dy=\"{dy}\">{}</tspan>",
            escape_xml(line)
        ));
    }

    text.push_str("</text>");
    text
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{svg}");
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    use usvg::fontdb;

    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let opt = usvg::Options {
        fontdb: std::sync::Arc::new(db),
        ..Default::default()
    };

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size();
    let scale = render_cfg.width / size.width();
    let width = (size.width() * scale).ceil() as u32;
    let height = match render_cfg.height {
        Some(height) => height.ceil() as u32,
        None => (size.height() * scale).ceil() as u32,
    };

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width.max(1), height.max(1))
        .ok_or_else(|| anyhow::anyhow!("failed to allocate {width}x{height} pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG output requires the `png` feature to be enabled"
    ))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
