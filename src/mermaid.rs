//! Mermaid `graph TD` emission for a KPI tree.
//!
//! Node identifiers are deterministic: `A` is the root, `B` the static
//! owner node, categories take spreadsheet-style letters from `C` onward
//! (`...Z`, `AA`, `AB`, ...). A category's metric appends `1` to the
//! category id and its subcategories append `2`, `3`, ... so derived ids
//! never collide with the metric.

use crate::ir::KpiTree;

const ROOT_ID: usize = 0;
const OWNER_ID: usize = 1;
const FIRST_CATEGORY_ID: usize = 2;

/// Emit the flowchart description. Identical trees produce byte-identical
/// output; line order is header, root edge, then one block per category in
/// input order.
pub fn generate_mermaid(tree: &KpiTree) -> String {
    let mut out = String::from("graph TD\n");

    out.push_str(&format!(
        "    {}[\"{}<br/>{}\"] --> {}[\"Owner<br/>KPI\"]\n",
        letter_id(ROOT_ID),
        escape_label(&tree.top_kpi.name),
        escape_label(&tree.top_kpi.description),
        letter_id(OWNER_ID),
    ));

    for (i, category) in tree.categories.iter().enumerate() {
        let cat_id = letter_id(FIRST_CATEGORY_ID + i);
        out.push_str(&format!(
            "    {} --> {cat_id}[\"{}<br/>{}\"]\n",
            letter_id(ROOT_ID),
            escape_label(&category.team),
            escape_label(&category.name),
        ));

        let metric_id = format!("{cat_id}1");
        out.push_str(&format!(
            "    {cat_id} --> {metric_id}[\"{}\"]\n",
            escape_label(&category.metric),
        ));

        for (j, subcategory) in category.subcategories.iter().enumerate() {
            let sub_id = format!("{cat_id}{}", j + 2);
            out.push_str(&format!(
                "    {metric_id} --> {sub_id}[\"{}\"]\n",
                escape_label(&subcategory.name),
            ));
        }
    }

    out
}

/// Spreadsheet-column letters: 0 -> A, 25 -> Z, 26 -> AA.
fn letter_id(mut index: usize) -> String {
    let mut id = String::new();
    loop {
        id.insert(0, (b'A' + (index % 26) as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    id
}

fn escape_label(text: &str) -> String {
    text.replace('"', "#quot;").replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Category, Subcategory, SubcategoryKind, TopKpi};

    fn reach_tree() -> KpiTree {
        KpiTree {
            top_kpi: TopKpi {
                name: "COMPANY".to_string(),
                description: "WAS".to_string(),
            },
            categories: vec![Category {
                name: "REACH".to_string(),
                team: "Marketing".to_string(),
                metric: "Subscribers".to_string(),
                subcategories: ["Retained", "Reactivated", "New"]
                    .iter()
                    .map(|name| Subcategory {
                        name: name.to_string(),
                        kind: SubcategoryKind::Normal,
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn emits_the_expected_document() {
        let expected = "graph TD\n\
                        \x20   A[\"COMPANY<br/>WAS\"] --> B[\"Owner<br/>KPI\"]\n\
                        \x20   A --> C[\"Marketing<br/>REACH\"]\n\
                        \x20   C --> C1[\"Subscribers\"]\n\
                        \x20   C1 --> C2[\"Retained\"]\n\
                        \x20   C1 --> C3[\"Reactivated\"]\n\
                        \x20   C1 --> C4[\"New\"]\n";
        assert_eq!(generate_mermaid(&reach_tree()), expected);
    }

    #[test]
    fn letter_ids_extend_past_z() {
        assert_eq!(letter_id(0), "A");
        assert_eq!(letter_id(2), "C");
        assert_eq!(letter_id(25), "Z");
        assert_eq!(letter_id(26), "AA");
        assert_eq!(letter_id(27), "AB");
        assert_eq!(letter_id(53), "BB");
    }

    #[test]
    fn embedded_newlines_become_line_breaks() {
        let mut tree = reach_tree();
        tree.categories[0].subcategories[0].name = "Product\nVideo starts / WAS".to_string();
        let out = generate_mermaid(&tree);
        assert!(out.contains("C2[\"Product<br/>Video starts / WAS\"]"));
        assert!(!out.contains("Product\nVideo"));
    }

    #[test]
    fn double_quotes_are_escaped() {
        let mut tree = reach_tree();
        tree.categories[0].metric = "\"quoted\" metric".to_string();
        let out = generate_mermaid(&tree);
        assert!(out.contains("C1[\"#quot;quoted#quot; metric\"]"));
    }

    #[test]
    fn no_subcategories_key_emits_no_metric_edges() {
        let mut tree = reach_tree();
        tree.categories[0].subcategories.clear();
        let out = generate_mermaid(&tree);
        assert!(!out.contains("C1 -->"));
        assert!(out.contains("C --> C1"));
    }
}
