use crate::ir::{KpiTree, TreeError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed kpi tree: {0}")]
    Json(#[from] json5::Error),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Parse a KPI tree document. Input is JSON5, so plain JSON works and
/// hand-written files may carry comments and trailing commas.
///
/// Fails fast on a missing required key (serde's "missing field" error comes
/// through [`ParseError::Json`]) or an empty `categories` list; no partial
/// tree is ever returned.
pub fn parse_kpi_tree(input: &str) -> Result<KpiTree, ParseError> {
    let tree: KpiTree = json5::from_str(input)?;
    tree.validate()?;
    debug!(
        categories = tree.categories.len(),
        subcategories = tree.subcategory_count(),
        "parsed kpi tree"
    );
    Ok(tree)
}
