use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use generic_queue_rs::Queue;
use std::sync::Arc;
use std::thread;

// Number of ping-pong operations per benchmark
const PING_PONGS: usize = 10_000;

/// Spins until an element arrives
fn wait_pop(q: &Queue<u32>) -> u32 {
    loop {
        if let Some(v) = q.try_pop() {
            return v;
        }
        std::hint::spin_loop();
    }
}

fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("latency");

    group.bench_function(BenchmarkId::new("Queue", "ping-pong"), |b| {
        b.iter(|| {
            let q1 = Arc::new(Queue::<u32>::new());
            let q2 = Arc::new(Queue::<u32>::new());

            // Ping thread
            let q1_ping = q1.clone();
            let q2_ping = q2.clone();
            let ping_thread = thread::spawn(move || {
                for i in 0..PING_PONGS {
                    q1_ping.put(black_box(i as u32));
                    black_box(wait_pop(&q2_ping));
                }
            });

            // Pong thread
            let pong_thread = thread::spawn(move || {
                for _ in 0..PING_PONGS {
                    let val = wait_pop(&q1);
                    q2.put(black_box(val));
                }
            });

            ping_thread.join().unwrap();
            pong_thread.join().unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_latency);
criterion_main!(benches);
