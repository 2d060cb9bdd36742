use generic_queue_rs::{add, sub, FloatMap, Named, Popped, Queue, Series, Slice};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Configuration
const PRODUCERS: usize = 2; // Number of producer threads
const CONSUMERS: usize = 2; // Number of consumer threads
const N: u64 = 100_000; // Each producer puts this many elements into the queue

fn main() {
    // RUST_LOG=generic_queue_rs=trace shows every queue operation
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Generic Queue Example");
    println!("---------------------\n");

    // Containers over the closed numeric sets
    let s: Slice<i32> = vec![1, 2, 3, 4].into();
    println!("Slice {:?} sums to {}", &*s, s.sum());

    let prices: FloatMap<String, f64> =
        [("bacon".to_string(), 6.66), ("pb".to_string(), 8.88)].into_iter().collect();
    println!("FloatMap total: {:.2}", prices.total());

    if let Some(series) = Series::new(vec![3, 4]) {
        println!("Series {:?}: max = {}, min = {}", series.data(), series.max(), series.min());
    }
    println!("{:?}", Named::new("answer", 42i64));

    // Arithmetic
    println!("sumInt: {}", add(1, 2));
    println!("sumFloat64: {}", add::<f64>(1.0, 3.1));
    println!("subInt: {}", sub::<i32>(1, 2));

    // A queue used from a single thread
    let q1 = Queue::new();
    q1.put(1);
    q1.put(2);
    println!("{:?} has {} elements", q1, q1.size());
    let (head, found) = q1.pop();
    println!("pop -> ({}, {}), {} left\n", head, found, q1.size());

    // A queue shared between producers and consumers
    let queue = Arc::new(Queue::<u64>::new());
    info!(producers = PRODUCERS, consumers = CONSUMERS, per_producer = N, "starting");
    let start_time = Instant::now();

    let producer_threads: Vec<_> = (0..PRODUCERS)
        .map(|_| {
            let q = queue.clone();
            thread::spawn(move || {
                for n in 1..=N {
                    q.put(n);
                }
            })
        })
        .collect();

    let consumer_threads: Vec<_> = (0..CONSUMERS)
        .map(|i| {
            let q = queue.clone();
            thread::spawn(move || {
                let mut local_sum = 0u64;
                let mut idle_rounds = 0;
                // Stop once the queue has stayed empty for a while
                while idle_rounds < 100 {
                    match q.pop_status() {
                        Popped::Element { value, .. } => {
                            local_sum += value;
                            idle_rounds = 0;
                        }
                        Popped::Empty => {
                            idle_rounds += 1;
                            thread::sleep(Duration::from_millis(1));
                        }
                    }
                }
                info!(consumer = i, sum = local_sum, "queue is empty, consumer done");
                local_sum
            })
        })
        .collect();

    for handle in producer_threads {
        if handle.join().is_err() {
            warn!("producer thread panicked");
        }
    }

    let total_sum: u64 = consumer_threads
        .into_iter()
        .filter_map(|handle| handle.join().ok())
        .sum();
    // Anything a consumer gave up on before producers finished
    let leftover: u64 = Arc::try_unwrap(queue)
        .map(|q| q.into_inner().into_iter().sum())
        .unwrap_or(0);

    let expected_sum = N * (N + 1) / 2 * PRODUCERS as u64;

    println!("Execution time: {:?}", start_time.elapsed());
    println!("Total sum: {}", total_sum + leftover);
    println!("Expected sum: {}", expected_sum);

    if total_sum + leftover != expected_sum {
        println!("ERROR: Sum mismatch!");
    } else {
        println!("SUCCESS: All elements were correctly processed.");
    }
}
