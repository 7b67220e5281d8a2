use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swob::{CleaningMap, SnapshotParser, TitleRegistry, DEFAULT_ORDER};

fn observation_document(fields: usize) -> String {
    let elements: String = (0..fields)
        .map(|i| {
            format!(
                r#"<element name="field_{i}" uom="°C" value="{i}.5"><qualifier name="qa_summary" uom="unitless" value="100"/></element>"#
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><om:ObservationCollection xmlns:om="http://www.opengis.net/om/1.0"><om:member><om:Observation><om:result><elements><element name="stn_nam" uom="unitless" value="SUMMERLAND"/><element name="tc_id" uom="unitless" value="VSL"/><element name="date_tm" uom="datetime" value="2014-01-01T00:00:00.000Z"/>{elements}</elements></om:result></om:Observation></om:member></om:ObservationCollection>"#
    )
}

fn bench_parse(c: &mut Criterion) {
    let document = observation_document(120);
    let disabled = CleaningMap::disabled();
    let enabled = CleaningMap::enabled_with([("field_3", "Air Temperature", 10)]);

    c.bench_function("parse_uncleaned", |b| {
        let parser = SnapshotParser::new(&disabled, DEFAULT_ORDER);
        b.iter(|| {
            let mut registry = TitleRegistry::new();
            parser.parse(black_box(&document), &mut registry)
        })
    });
    c.bench_function("parse_cleaned", |b| {
        let parser = SnapshotParser::new(&enabled, DEFAULT_ORDER);
        b.iter(|| {
            let mut registry = TitleRegistry::new();
            parser.parse(black_box(&document), &mut registry)
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
