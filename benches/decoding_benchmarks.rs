use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rtf_extract::{Decoder, Strategy};
use std::hint::black_box;

/// Generate RTF content of different patterns for benchmarking
fn generate_rtf_content(paragraphs: usize, pattern: &str) -> String {
    let mut content = String::from("{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Times New Roman;}}\n");

    match pattern {
        "plain" => {
            for i in 0..paragraphs {
                content.push_str(&format!("\\pard Paragraph {} of plain body text.\\par\n", i));
            }
        }
        "formatted" => {
            for i in 0..paragraphs {
                content.push_str(&format!(
                    "\\pard\\sa200\\sl276\\slmult1 {{\\b Heading {}}} {{\\i with\\i0  emphasis}} and \\fs24 sizes\\par\n",
                    i
                ));
            }
        }
        "accented" => {
            for i in 0..paragraphs {
                content.push_str(&format!(
                    "\\pard Caf\\'e9 {} na\\'efve r\\'e9sum\\'e9 \\{{literal\\}}\\par\n",
                    i
                ));
            }
        }
        _ => {
            for i in 0..paragraphs {
                content.push_str(&format!("line {}\n", i));
            }
        }
    }

    content.push('}');
    content
}

/// Benchmark both strategies over documents of different sizes
fn bench_decoding(c: &mut Criterion) {
    let sizes = [100, 1_000, 10_000];
    let patterns = ["plain", "formatted", "accented"];
    let strategies = [("substitute", Strategy::Substitute), ("scan", Strategy::Scan)];

    let mut group = c.benchmark_group("decoding");

    for &size in &sizes {
        for pattern in patterns {
            let content = generate_rtf_content(size, pattern);
            group.throughput(Throughput::Bytes(content.len() as u64));

            for (name, strategy) in strategies {
                let decoder = Decoder::new().with_strategy(strategy);
                group.bench_with_input(
                    BenchmarkId::new(format!("{}_{}", name, pattern), size),
                    &content,
                    |b, content| b.iter(|| decoder.decode(black_box(content)).count()),
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_decoding);
criterion_main!(benches);
