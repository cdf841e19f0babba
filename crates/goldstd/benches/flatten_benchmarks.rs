//! Flattening performance benchmarks.
//!
//! Measures single-record flattening as list widths grow, and whole-batch
//! flattening plus TSV serialisation as row counts grow.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use goldstd::flatten::{FlattenConfig, flatten, flatten_batch};
use goldstd::record::{Record, record_from_json};
use goldstd::{Table, TableConfig};
use serde_json::json;

/// Generate a synthetic gold-standard record with `evidence` entries.
fn generate_record(id: usize, evidence: usize) -> Record {
    let entries: Vec<_> = (0..evidence)
        .map(|i| {
            json!({
                "class": format!("class_{}", i % 4),
                "source": format!("PMID{:08}", id * 31 + i),
                "confidence": if i % 3 == 0 { "High" } else { "Low" },
                "curated_by": "benchmark"
            })
        })
        .collect();

    record_from_json(json!({
        "sentinel_variant": {
            "rsid": format!("rs{}", id),
            "locus_GRCh37": {"chromosome": format!("{}", id % 22 + 1), "position": id * 1000 + 1},
            "locus_GRCh38": {"chromosome": format!("{}", id % 22 + 1), "position": id * 1000 + 7}
        },
        "trait_info": {"reported_trait_name": "LDL cholesterol", "ontology": ["EFO_0004611"]},
        "gold_standard_info": {"gene_id": format!("ENSG{:011}", id), "evidence": entries},
        "metadata": {"tags": ["benchmark", "synthetic"], "comments": []}
    }))
    .unwrap()
}

/// Benchmark flattening a single record with growing evidence lists.
fn bench_flatten_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_record");
    let config = FlattenConfig::default();

    for evidence in [1, 10, 100].iter() {
        let record = generate_record(1, *evidence);
        group.bench_with_input(BenchmarkId::new("evidence", evidence), &record, |b, record| {
            b.iter(|| black_box(flatten(record, &config).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark flattening and writing whole batches.
fn bench_flatten_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_batch");
    let config = FlattenConfig::default();

    for rows in [100, 1_000, 10_000].iter() {
        let records: Vec<Record> = (0..*rows).map(|id| generate_record(id, 3)).collect();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &records, |b, records| {
            b.iter(|| {
                let table = Table::from_flat_records(flatten_batch(records, &config).unwrap());
                let mut out = Vec::new();
                table.write_delimited(&mut out, &TableConfig::default()).unwrap();
                black_box(out)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flatten_record, bench_flatten_batch);
criterion_main!(benches);
