use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kpi_tree_renderer::config::LayoutConfig;
use kpi_tree_renderer::layout::compute_layout;
use kpi_tree_renderer::mermaid::generate_mermaid;
use kpi_tree_renderer::parser::parse_kpi_tree;
use kpi_tree_renderer::render::render_svg;
use kpi_tree_renderer::theme::Theme;
use std::hint::black_box;

const COMPANY_WAS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benches/fixtures/company_was.json5"
));

fn synthetic_source(categories: usize, subcategories: usize) -> String {
    let mut out = String::from(
        r#"{ "top_kpi": { "name": "SYNTH", "description": "Synthetic KPI" }, "categories": ["#,
    );
    for i in 0..categories {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            r#"{{ "name": "CAT{i}", "team": "Team {i}", "metric": "Metric {i}", "subcategories": ["#
        ));
        for j in 0..subcategories {
            if j > 0 {
                out.push(',');
            }
            let kind = if j % 3 == 0 { "action" } else { "normal" };
            out.push_str(&format!(r#"{{ "name": "Sub {i}-{j}", "type": "{kind}" }}"#));
        }
        out.push_str("] }");
    }
    out.push_str("] }");
    out
}

fn bench_config() -> LayoutConfig {
    LayoutConfig {
        fast_text_metrics: true,
        ..LayoutConfig::default()
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let cases = [
        ("company_was", COMPANY_WAS.to_string()),
        ("synthetic_8x4", synthetic_source(8, 4)),
        ("synthetic_32x6", synthetic_source(32, 6)),
    ];
    for (name, input) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let tree = parse_kpi_tree(black_box(data)).expect("parse failed");
                black_box(tree.categories.len());
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let theme = Theme::classic();
    let config = bench_config();
    let cases = [
        ("company_was", COMPANY_WAS.to_string()),
        ("synthetic_8x4", synthetic_source(8, 4)),
        ("synthetic_32x6", synthetic_source(32, 6)),
    ];
    for (name, input) in &cases {
        let tree = parse_kpi_tree(input).expect("parse failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &tree, |b, tree| {
            b.iter(|| {
                let layout = compute_layout(black_box(tree), &theme, &config).expect("layout failed");
                black_box(layout.nodes.len());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::classic();
    let config = bench_config();
    let cases = [
        ("company_was", COMPANY_WAS.to_string()),
        ("synthetic_8x4", synthetic_source(8, 4)),
        ("synthetic_32x6", synthetic_source(32, 6)),
    ];
    for (name, input) in &cases {
        let tree = parse_kpi_tree(input).expect("parse failed");
        let layout = compute_layout(&tree, &theme, &config).expect("layout failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &layout, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data), &theme, &config);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_mermaid(c: &mut Criterion) {
    let mut group = c.benchmark_group("mermaid");
    let cases = [
        ("company_was", COMPANY_WAS.to_string()),
        ("synthetic_8x4", synthetic_source(8, 4)),
        ("synthetic_32x6", synthetic_source(32, 6)),
    ];
    for (name, input) in &cases {
        let tree = parse_kpi_tree(input).expect("parse failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &tree, |b, tree| {
            b.iter(|| {
                let diagram = generate_mermaid(black_box(tree));
                black_box(diagram.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::classic();
    let config = bench_config();
    let cases = [
        ("company_was", COMPANY_WAS.to_string()),
        ("synthetic_8x4", synthetic_source(8, 4)),
        ("synthetic_32x6", synthetic_source(32, 6)),
    ];
    for (name, input) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let tree = parse_kpi_tree(black_box(data)).expect("parse failed");
                let layout = compute_layout(&tree, &theme, &config).expect("layout failed");
                let svg = render_svg(&layout, &theme, &config);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_layout, bench_render, bench_mermaid, bench_end_to_end
);
criterion_main!(benches);
