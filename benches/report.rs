//! Benchmarks for enrichment, report assembly and CSV export.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench report -- enrich`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hashtag_report::RawRecord;
use hashtag_report::core::output::to_csv;
use hashtag_report::core::{ReportAssembler, enrich_all, link_hashtags};
use hashtag_report::store::MemoryStore;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let tag = if i % 3 == 0 { "typo" } else { "cleanup" };
            RawRecord::new(
                if i % 5 == 0 { "wikidata" } else { "en" },
                format!("Page_number_{}", i % 100),
                format!("User{}", i % 17),
                format!("2016{:02}{:02}120000", (i % 12) + 1, (i % 28) + 1),
            )
            .with_revisions(i as u64 + 1, i as u64)
            .with_lengths(100, 100 + (i % 50) as i64)
            .with_comment(format!("Edit <b>{}</b> fixing #{} & #wiki", i, tag))
            .with_tag(tag)
            .with_id(i as u64)
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_link_hashtags(c: &mut Criterion) {
    let comment = "Fixed <i>several</i> #typo and #cleanup issues, see #typo & \"#wiki\"";
    c.bench_function("link_hashtags", |b| {
        b.iter(|| black_box(link_hashtags(black_box(comment))));
    });
}

fn bench_enrich(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrich");

    for size in [100_usize, 1_000, 10_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(enrich_all(black_box(records.clone())).unwrap()));
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let store = MemoryStore::from_records(generate_records(20_000));
    let assembler = ReportAssembler::new(&store);

    c.bench_function("report_page", |b| {
        b.iter(|| black_box(assembler.search(Some("typo"), None, black_box(40)).unwrap()));
    });
}

fn bench_output_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_csv");

    for size in [1_000_usize, 10_000] {
        let records = enrich_all(generate_records(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(to_csv(black_box(records)).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_link_hashtags,
    bench_enrich,
    bench_report,
    bench_output_csv
);
criterion_main!(benches);
