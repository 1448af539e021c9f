//! Device comparison benchmarks (Criterion)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use qvb_benchmark::functions::benchmark_circuit;
use qvb_benchmark::HyperParams;
use qvb_core::DEVICE_NAMES;

fn bench_devices(c: &mut Criterion) {
    let mut group = c.benchmark_group("device_circuit_evaluation");
    group.sample_size(20);

    for device in DEVICE_NAMES {
        for n_wires in [2, 5, 10] {
            for n_layers in [3, 6, 9] {
                group.bench_with_input(
                    BenchmarkId::new(device, format!("{n_wires}x{n_layers}")),
                    &(n_wires, n_layers),
                    |b, &(n_wires, n_layers)| {
                        b.iter(|| {
                            let mut hp = HyperParams::new();
                            hp.set("device", device);
                            hp.set("n_wires", n_wires);
                            hp.set("n_layers", n_layers);
                            benchmark_circuit(black_box(&mut hp), 1).unwrap();
                        });
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_devices);
criterion_main!(benches);
