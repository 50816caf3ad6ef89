use crate::layout::Layout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON-serializable snapshot of a computed layout, for inspection and
/// golden-file diffing.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
    pub row_labels: Vec<RowLabelDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub role: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label_lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub from: String,
    pub to: String,
    pub points: Vec<[f32; 2]>,
}

#[derive(Debug, Serialize)]
pub struct RowLabelDump {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let nodes = layout
            .nodes
            .values()
            .map(|node| NodeDump {
                id: node.id.clone(),
                role: format!("{:?}", node.role),
                x: node.x,
                y: node.y,
                width: node.width,
                height: node.height,
                label_lines: node.label.lines.clone(),
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|edge| EdgeDump {
                from: edge.from.clone(),
                to: edge.to.clone(),
                points: edge.points.iter().map(|(x, y)| [*x, *y]).collect(),
            })
            .collect();

        let row_labels = layout
            .row_labels
            .iter()
            .map(|label| RowLabelDump {
                text: label.text.clone(),
                x: label.x,
                y: label.y,
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            nodes,
            edges,
            row_labels,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::ir::{Category, KpiTree, TopKpi};
    use crate::layout::compute_layout;
    use crate::theme::Theme;

    #[test]
    fn dump_mirrors_layout_counts() {
        let tree = KpiTree {
            top_kpi: TopKpi {
                name: "A".to_string(),
                description: "B".to_string(),
            },
            categories: vec![Category {
                name: "C".to_string(),
                team: "T".to_string(),
                metric: "M".to_string(),
                subcategories: Vec::new(),
            }],
        };
        let config = LayoutConfig {
            fast_text_metrics: true,
            ..LayoutConfig::default()
        };
        let layout = compute_layout(&tree, &Theme::classic(), &config).expect("layout failed");
        let dump = LayoutDump::from_layout(&layout);
        assert_eq!(dump.nodes.len(), layout.nodes.len());
        assert_eq!(dump.edges.len(), layout.edges.len());
        assert_eq!(dump.row_labels.len(), 4);
        let json = serde_json::to_string(&dump).expect("serialize failed");
        assert!(json.contains("\"TopKpi\""));
    }
}
