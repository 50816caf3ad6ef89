mod text;
mod tree;
pub(crate) mod types;
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::{KpiTree, TreeError};
use crate::theme::Theme;

/// Map a KPI tree onto the fixed four-row canvas.
///
/// Rejects a tree with no categories; everything else is total. The result
/// is deterministic for a given tree, theme, and config.
pub fn compute_layout(
    tree: &KpiTree,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Layout, TreeError> {
    tree::compute_tree_layout(tree, theme, config)
}
