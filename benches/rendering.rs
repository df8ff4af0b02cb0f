use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::sync::Arc;

use datatable_view::column::Column;
use datatable_view::error::Result;
use datatable_view::{DatatableDefinition, DatatableView, RenderKind, TeraRenderer, ViewParts};

struct BenchTable {
    columns: usize,
    server_side: bool,
}

impl DatatableDefinition for BenchTable {
    fn name(&self) -> &str {
        "bench_table"
    }

    fn configure(&self, parts: &mut ViewParts) -> Result<()> {
        parts.features.set_server_side(self.server_side);
        parts.ajax.set_url("/bench/results");
        parts.columns.add(Column::multiselect())?;
        for i in 0..self.columns {
            parts
                .columns
                .add(Column::new(format!("field_{}", i), format!("Field {}", i)))?;
        }
        Ok(())
    }
}

fn generate_rows(size: usize, columns: usize) -> Value {
    let rows: Vec<Value> = (0..size)
        .map(|i| {
            let mut row = serde_json::Map::new();
            for c in 0..columns {
                row.insert(format!("field_{}", c), json!(format!("Row {} value {}", i, c)));
            }
            Value::Object(row)
        })
        .collect();
    Value::Array(rows)
}

fn build_view(renderer: &Arc<TeraRenderer>, columns: usize, server_side: bool) -> DatatableView<BenchTable> {
    DatatableView::with_templates(
        BenchTable {
            columns,
            server_side,
        },
        renderer.clone(),
        TeraRenderer::bundled_templates(),
    )
    .unwrap()
}

fn bench_render_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_kind");
    let renderer = Arc::new(TeraRenderer::new().unwrap());
    let view = build_view(&renderer, 8, true);

    for kind in [RenderKind::Html, RenderKind::Js, RenderKind::All] {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| black_box(view.render(kind).unwrap()));
        });
    }

    group.finish();
}

fn bench_client_side_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("client_side_rows");
    let renderer = Arc::new(TeraRenderer::new().unwrap());

    for size in [10, 100, 1000].iter() {
        let mut view = build_view(&renderer, 6, false);
        view.set_data(generate_rows(*size, 6));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(view.render(RenderKind::Js).unwrap()));
        });
    }

    group.finish();
}

fn bench_view_construction(c: &mut Criterion) {
    let renderer = Arc::new(TeraRenderer::new().unwrap());

    c.bench_function("view_construction", |b| {
        b.iter(|| black_box(build_view(&renderer, 8, true)));
    });
}

criterion_group!(
    benches,
    bench_render_kinds,
    bench_client_side_data,
    bench_view_construction
);
criterion_main!(benches);
