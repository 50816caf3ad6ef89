#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod mermaid;
pub mod parser;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use ir::{KpiTree, TreeError};
pub use layout::{Layout, compute_layout};
pub use mermaid::generate_mermaid;
pub use parser::{ParseError, parse_kpi_tree};
pub use render::render_svg;
pub use theme::Theme;
