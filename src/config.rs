use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry of the fixed four-row canvas. Defaults mirror the classic
/// 10x8-unit figure at 120 px per unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Horizontal margin on each side; categories share the space between.
    pub margin_x: f32,
    pub top_kpi_y: f32,
    pub category_y: f32,
    pub metric_y: f32,
    pub subcategory_y: f32,
    pub top_kpi_width: f32,
    pub top_kpi_height: f32,
    pub owner_x: f32,
    pub owner_width: f32,
    pub owner_height: f32,
    pub category_width: f32,
    pub category_height: f32,
    pub metric_width: f32,
    pub metric_height: f32,
    pub subcategory_width: f32,
    pub subcategory_height: f32,
    /// Total horizontal span the subcategories of one category spread over,
    /// centered on the parent category x.
    pub subcategory_span: f32,
    pub row_label_x: f32,
    pub corner_radius: f32,
    pub label_line_height: f32,
    pub label_padding_x: f32,
    /// Skip font queries and estimate widths from an average glyph width.
    pub fast_text_metrics: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1200.0,
            canvas_height: 960.0,
            margin_x: 120.0,
            top_kpi_y: 120.0,
            category_y: 300.0,
            metric_y: 480.0,
            subcategory_y: 660.0,
            top_kpi_width: 300.0,
            top_kpi_height: 96.0,
            owner_x: 1020.0,
            owner_width: 120.0,
            owner_height: 60.0,
            category_width: 180.0,
            category_height: 120.0,
            metric_width: 180.0,
            metric_height: 96.0,
            subcategory_width: 96.0,
            subcategory_height: 72.0,
            subcategory_span: 144.0,
            row_label_x: 24.0,
            corner_radius: 10.0,
            label_line_height: 1.4,
            label_padding_x: 12.0,
            fast_text_metrics: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Raster width in pixels for PNG output; height follows the canvas
    /// aspect ratio unless set explicitly.
    pub width: f32,
    pub height: Option<f32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::classic(),
            layout: LayoutConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    render: Option<RenderConfigFile>,
}

/// Color roles follow the classic chart: primary = top KPI, secondary =
/// categories, tertiary = subcategories, quaternary = action drivers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    primary_color: Option<String>,
    secondary_color: Option<String>,
    tertiary_color: Option<String>,
    quaternary_color: Option<String>,
    line_color: Option<String>,
    row_label_color: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    canvas_width: Option<f32>,
    canvas_height: Option<f32>,
    fast_text_metrics: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "modern" {
            config.theme = Theme::modern();
        } else if theme_name == "classic" || theme_name == "default" {
            config.theme = Theme::classic();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.primary_color {
            config.theme.top_kpi.fill = v;
        }
        if let Some(v) = vars.secondary_color {
            config.theme.category.fill = v;
        }
        if let Some(v) = vars.tertiary_color {
            config.theme.subcategory.fill = v;
        }
        if let Some(v) = vars.quaternary_color {
            config.theme.action.fill = v;
        }
        if let Some(v) = vars.line_color {
            config.theme.line_color = v;
        }
        if let Some(v) = vars.row_label_color {
            config.theme.row_label_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.canvas_width {
            config.layout.canvas_width = v;
        }
        if let Some(v) = layout.canvas_height {
            config.layout.canvas_height = v;
        }
        if let Some(v) = layout.fast_text_metrics {
            config.layout.fast_text_metrics = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(height) = render.height {
            config.render.height = Some(height);
        }
    }

    Ok(config)
}
