use crate::ir::SubcategoryKind;
use serde::{Deserialize, Serialize};

/// Fill and text color pair for one box role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxStyle {
    pub fill: String,
    pub text_color: String,
}

impl BoxStyle {
    fn new(fill: &str, text_color: &str) -> Self {
        Self {
            fill: fill.to_string(),
            text_color: text_color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub top_kpi_font_size: f32,
    pub owner_font_size: f32,
    pub category_font_size: f32,
    pub metric_font_size: f32,
    pub subcategory_font_size: f32,
    pub row_label_font_size: f32,
    pub top_kpi: BoxStyle,
    pub owner: BoxStyle,
    pub category: BoxStyle,
    pub metric: BoxStyle,
    pub subcategory: BoxStyle,
    pub action: BoxStyle,
    pub line_color: String,
    pub border_color: String,
    pub row_label_color: String,
    pub background: String,
}

impl Theme {
    /// The original orange/blue/pink palette of the hand-drawn chart.
    pub fn classic() -> Self {
        Self {
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            top_kpi_font_size: 24.0,
            owner_font_size: 18.0,
            category_font_size: 20.0,
            metric_font_size: 18.0,
            subcategory_font_size: 16.0,
            row_label_font_size: 20.0,
            top_kpi: BoxStyle::new("#FFA500", "#000000"),
            owner: BoxStyle::new("#000000", "#FFFFFF"),
            category: BoxStyle::new("#1E90FF", "#FFFFFF"),
            metric: BoxStyle::new("#FFFFFF", "#000000"),
            subcategory: BoxStyle::new("#FFB6C1", "#000000"),
            action: BoxStyle::new("#FF6347", "#FFFFFF"),
            line_color: "#808080".to_string(),
            border_color: "#808080".to_string(),
            row_label_color: "#808080".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    /// Softer palette for dashboards that sit next to modern UI chrome.
    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            top_kpi_font_size: 22.0,
            owner_font_size: 16.0,
            category_font_size: 18.0,
            metric_font_size: 16.0,
            subcategory_font_size: 14.0,
            row_label_font_size: 18.0,
            top_kpi: BoxStyle::new("#F59E0B", "#1C2430"),
            owner: BoxStyle::new("#1C2430", "#F8FAFF"),
            category: BoxStyle::new("#3B82F6", "#F8FAFF"),
            metric: BoxStyle::new("#F8FAFF", "#1C2430"),
            subcategory: BoxStyle::new("#FBCFE8", "#1C2430"),
            action: BoxStyle::new("#EF4444", "#F8FAFF"),
            line_color: "#7A8AA6".to_string(),
            border_color: "#C7D2E5".to_string(),
            row_label_color: "#7A8AA6".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    /// Style lookup for a subcategory kind.
    pub fn subcategory_style(&self, kind: SubcategoryKind) -> &BoxStyle {
        match kind {
            SubcategoryKind::Normal => &self.subcategory,
            SubcategoryKind::Action => &self.action,
        }
    }
}
