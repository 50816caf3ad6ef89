use std::collections::BTreeMap;

use crate::ir::SubcategoryKind;

/// Measured multi-line label.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
}

/// Which of the fixed rows a node belongs to; drives style selection in the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    TopKpi,
    Owner,
    Category,
    Metric,
    Subcategory(SubcategoryKind),
}

#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub id: String,
    /// Top-left corner.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: TextBlock,
    pub role: NodeRole,
    pub bold: bool,
}

#[derive(Debug, Clone)]
pub struct EdgeLayout {
    pub from: String,
    pub to: String,
    pub points: Vec<(f32, f32)>,
}

/// One of the four static row captions down the left edge, drawn rotated.
#[derive(Debug, Clone)]
pub struct RowLabelLayout {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub nodes: BTreeMap<String, NodeLayout>,
    pub edges: Vec<EdgeLayout>,
    pub row_labels: Vec<RowLabelLayout>,
    pub width: f32,
    pub height: f32,
}

impl NodeLayout {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn top_center(&self) -> (f32, f32) {
        (self.center_x(), self.y)
    }

    pub fn bottom_center(&self) -> (f32, f32) {
        (self.center_x(), self.y + self.height)
    }
}
