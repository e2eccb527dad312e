use art_relay::{FurAffinityAdapter, LinkScanner, SiteAdapter, WeasylAdapter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

const CHATTER: &str = "had a great weekend, drew some sketches and went hiking. \
                       anyone up for a collab later this week? ";

const WEASYL_PAYLOAD: &str = r#"{
    "title": "Sunset",
    "owner": "alice",
    "owner_media": {"avatar": [{"url": "https://cdn.weasyl.com/avatar.png"}]},
    "media": {"submission": [{"links": {"cover": [{"url": "https://cdn.weasyl.com/cover.png"}]}}]}
}"#;

fn bench_scan(c: &mut Criterion) {
    let scanner = LinkScanner::default();
    let plain = CHATTER.repeat(20);
    let linked = format!(
        "{plain} https://www.furaffinity.net/view/12345/ {plain} \
         https://www.weasyl.com/~alice/submissions/987/sunset furaffinity.net/view/6789"
    );

    let mut group = c.benchmark_group("link_scanner");
    group
        .sample_size(100)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));

    group.bench_function("no_links", |b| b.iter(|| black_box(scanner.scan(&plain))));
    group.bench_function("three_links", |b| {
        b.iter(|| black_box(scanner.scan(&linked)))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let fur_affinity = FurAffinityAdapter::new();
    let weasyl = WeasylAdapter::new("bench-key").unwrap();
    let fa_payload =
        br#"{"author":"Bob","avatar":"http://a","title":"Cat","image_url":"http://b"}"#;

    let mut group = c.benchmark_group("adapter_parse");
    group.bench_function("fur_affinity", |b| {
        b.iter(|| black_box(fur_affinity.parse_response(fa_payload).unwrap()))
    });
    group.bench_function("weasyl", |b| {
        b.iter(|| black_box(weasyl.parse_response(WEASYL_PAYLOAD.as_bytes()).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_scan, bench_parse);
criterion_main!(benches);
