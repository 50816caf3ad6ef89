use std::collections::BTreeMap;

use tracing::debug;

use crate::config::LayoutConfig;
use crate::ir::{KpiTree, TreeError};
use crate::theme::Theme;

use super::text::measure_label;
use super::{EdgeLayout, Layout, NodeLayout, NodeRole, RowLabelLayout, TextBlock};

pub(super) fn compute_tree_layout(
    tree: &KpiTree,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Layout, TreeError> {
    tree.validate()?;

    let mut nodes: BTreeMap<String, NodeLayout> = BTreeMap::new();
    let mut edges: Vec<EdgeLayout> = Vec::new();

    let root_label = format!("{}\n{}", tree.top_kpi.name, tree.top_kpi.description);
    let root = place_node(
        "top_kpi",
        config.canvas_width / 2.0,
        config.top_kpi_y,
        config.top_kpi_width,
        config.top_kpi_height,
        &root_label,
        theme.top_kpi_font_size,
        NodeRole::TopKpi,
        true,
        theme,
        config,
    );
    let root_anchor = root.bottom_center();
    nodes.insert(root.id.clone(), root);

    let owner = place_node(
        "owner",
        config.owner_x,
        config.top_kpi_y,
        config.owner_width,
        config.owner_height,
        "Owner\nKPI",
        theme.owner_font_size,
        NodeRole::Owner,
        false,
        theme,
        config,
    );
    nodes.insert(owner.id.clone(), owner);

    // One slot per category across the usable width, boxes centered in
    // their slot.
    let usable_width = config.canvas_width - 2.0 * config.margin_x;
    let slot_width = usable_width / tree.categories.len() as f32;

    for (i, category) in tree.categories.iter().enumerate() {
        let cat_id = format!("cat{i}");
        let metric_id = format!("{cat_id}_metric");
        let x = config.margin_x + (i as f32 + 0.5) * slot_width;

        let category_label = format!("{}\n{}", category.team, category.name);
        let cat_node = place_node(
            &cat_id,
            x,
            config.category_y,
            config.category_width,
            config.category_height,
            &category_label,
            theme.category_font_size,
            NodeRole::Category,
            true,
            theme,
            config,
        );
        edges.push(EdgeLayout {
            from: "top_kpi".to_string(),
            to: cat_id.clone(),
            points: vec![root_anchor, cat_node.top_center()],
        });

        let metric_node = place_node(
            &metric_id,
            x,
            config.metric_y,
            config.metric_width,
            config.metric_height,
            &category.metric,
            theme.metric_font_size,
            NodeRole::Metric,
            false,
            theme,
            config,
        );
        edges.push(EdgeLayout {
            from: cat_id.clone(),
            to: metric_id.clone(),
            points: vec![cat_node.bottom_center(), metric_node.top_center()],
        });
        let metric_anchor = metric_node.bottom_center();

        nodes.insert(cat_node.id.clone(), cat_node);
        nodes.insert(metric_node.id.clone(), metric_node);

        let count = category.subcategories.len();
        for (j, subcategory) in category.subcategories.iter().enumerate() {
            // A lone subcategory sits directly below its parent; otherwise
            // the group spreads evenly across the fixed span.
            let sub_x = if count > 1 {
                let step = config.subcategory_span / (count - 1) as f32;
                x - config.subcategory_span / 2.0 + j as f32 * step
            } else {
                x
            };
            let sub_id = format!("{cat_id}_sub{j}");
            let sub_node = place_node(
                &sub_id,
                sub_x,
                config.subcategory_y,
                config.subcategory_width,
                config.subcategory_height,
                &subcategory.name,
                theme.subcategory_font_size,
                NodeRole::Subcategory(subcategory.kind),
                false,
                theme,
                config,
            );
            edges.push(EdgeLayout {
                from: metric_id.clone(),
                to: sub_id.clone(),
                points: vec![metric_anchor, sub_node.top_center()],
            });
            nodes.insert(sub_node.id.clone(), sub_node);
        }
    }

    let row_labels = vec![
        row_label("TOP KPI", config.top_kpi_y, config),
        row_label("CATEGORIES", config.category_y, config),
        row_label("METRICS", config.metric_y, config),
        row_label("SUB-METRICS", config.subcategory_y, config),
    ];

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "computed kpi tree layout"
    );

    Ok(Layout {
        nodes,
        edges,
        row_labels,
        width: config.canvas_width,
        height: config.canvas_height,
    })
}

#[allow(clippy::too_many_arguments)]
fn place_node(
    id: &str,
    center_x: f32,
    center_y: f32,
    width: f32,
    height: f32,
    text: &str,
    font_size: f32,
    role: NodeRole,
    bold: bool,
    theme: &Theme,
    config: &LayoutConfig,
) -> NodeLayout {
    let max_width = (width - 2.0 * config.label_padding_x).max(1.0);
    let label: TextBlock = measure_label(text, font_size, max_width, theme, config);
    NodeLayout {
        id: id.to_string(),
        x: center_x - width / 2.0,
        y: center_y - height / 2.0,
        width,
        height,
        label,
        role,
        bold,
    }
}

fn row_label(text: &str, y: f32, config: &LayoutConfig) -> RowLabelLayout {
    RowLabelLayout {
        text: text.to_string(),
        x: config.row_label_x,
        y,
    }
}
