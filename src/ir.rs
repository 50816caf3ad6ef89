use serde::Deserialize;
use thiserror::Error;

/// Visual treatment of a subcategory. `Action` marks an actionable driver
/// and only changes the fill/text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubcategoryKind {
    #[default]
    Normal,
    Action,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopKpi {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subcategory {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: SubcategoryKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    pub team: String,
    pub metric: String,
    /// An absent key deserializes to an empty vec; both mean the branch
    /// ends at the metric row.
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// The 4-level input tree: top KPI -> categories -> metric -> subcategories.
#[derive(Debug, Clone, Deserialize)]
pub struct KpiTree {
    pub top_kpi: TopKpi,
    pub categories: Vec<Category>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("kpi tree has no categories")]
    NoCategories,
}

impl KpiTree {
    /// Category positions divide by the category count, so an empty list is
    /// rejected up front instead of producing a degenerate layout.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.categories.is_empty() {
            return Err(TreeError::NoCategories);
        }
        Ok(())
    }

    pub fn subcategory_count(&self) -> usize {
        self.categories.iter().map(|c| c.subcategories.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_tree() -> KpiTree {
        KpiTree {
            top_kpi: TopKpi {
                name: "COMPANY".to_string(),
                description: "Weekly active subscribers (WAS)".to_string(),
            },
            categories: vec![Category {
                name: "REACH".to_string(),
                team: "Marketing".to_string(),
                metric: "Subscribers".to_string(),
                subcategories: Vec::new(),
            }],
        }
    }

    #[test]
    fn validate_accepts_minimal_tree() {
        assert!(minimal_tree().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_categories() {
        let mut tree = minimal_tree();
        tree.categories.clear();
        assert_eq!(tree.validate(), Err(TreeError::NoCategories));
    }

    #[test]
    fn subcategory_count_sums_across_categories() {
        let mut tree = minimal_tree();
        tree.categories[0].subcategories = vec![
            Subcategory {
                name: "Retained".to_string(),
                kind: SubcategoryKind::Normal,
            },
            Subcategory {
                name: "New".to_string(),
                kind: SubcategoryKind::Action,
            },
        ];
        assert_eq!(tree.subcategory_count(), 2);
    }
}
