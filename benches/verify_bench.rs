use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ustid::core::*;
use ustid::evatr::{EvatrFields, MessageCatalog};

fn param(name: &str, value: &str) -> String {
    format!(
        "<param><value><array><data>\
         <value><string>{name}</string></value>\
         <value><string>{value}</string></value>\
         </data></array></value></param>"
    )
}

/// A reply document the size eVatR actually sends for a qualified
/// confirmation.
fn confirmation_reply() -> String {
    let params = [
        ("UstId_1", "DE129273398"),
        ("ErrorCode", "200"),
        ("UstId_2", "ATU12345678"),
        ("Druck", "nein"),
        ("Erg", "A"),
        ("Erg_Name", "A"),
        ("Erg_Ort", "A"),
        ("Erg_PLZ", "B"),
        ("Erg_Str", "C"),
        ("Gueltig_ab", ""),
        ("Gueltig_bis", ""),
        ("Datum", "26.08.2026"),
        ("Uhrzeit", "14:03:12"),
    ];
    let body: String = params.iter().map(|(n, v)| param(n, v)).collect();
    format!("<params>{body}</params>")
}

fn large_reply(params: usize) -> String {
    let body: String = (0..params)
        .map(|i| param(&format!("Field{i}"), "some value here"))
        .collect();
    format!("<params>{body}</params>")
}

// ── Benchmarks ─────────────────────────────────────────────────────

fn bench_gate_and_split(c: &mut Criterion) {
    c.bench_function("gate_and_split_lenient", |b| {
        b.iter(|| {
            require_plausible(black_box("DE129273398")).unwrap();
            black_box(VatId::split_lenient(black_box("DE129273398"), "DE"))
        });
    });

    c.bench_function("split_strict", |b| {
        b.iter(|| black_box(VatId::split_strict(black_box("ATU12345678"))));
    });
}

fn bench_decompose_address(c: &mut Criterion) {
    c.bench_function("decompose_address", |b| {
        b.iter(|| {
            black_box(decompose_address(black_box(
                "Friedrichstraße 123\n10115 Berlin DE",
            )))
        });
    });
}

fn bench_evatr_parse(c: &mut Criterion) {
    let reply = confirmation_reply();
    c.bench_function("evatr_parse_reply", |b| {
        b.iter(|| black_box(EvatrFields::parse(black_box(&reply))));
    });

    let big = large_reply(1000);
    c.bench_function("evatr_parse_1000_params", |b| {
        b.iter(|| black_box(EvatrFields::parse(black_box(&big))));
    });
}

fn bench_catalog_lookup(c: &mut Criterion) {
    let catalog = MessageCatalog::new();
    c.bench_function("catalog_lookup", |b| {
        b.iter(|| {
            black_box(catalog.error_text(black_box("219")));
            black_box(catalog.match_text(black_box("B")))
        });
    });
}

criterion_group!(
    benches,
    bench_gate_and_split,
    bench_decompose_address,
    bench_evatr_parse,
    bench_catalog_lookup,
);
criterion_main!(benches);
