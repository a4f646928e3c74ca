use crackitos::batch::FourVec4;
use crackitos::config::DEFAULT_CRACKITOS_CONFIG;
use crackitos::consts::LANES;
use crackitos::intersect::Intersects;
use crackitos::math::Vec4;
use crackitos::scene::Scene;
use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::env::args;
use std::hint::black_box;
use std::time::Instant;

const RNG_SEED: u64 = 0;

fn main() {
    let n_vectors: usize = args()
        .nth(1)
        .map(|s| s.parse().expect("first argument must be the number of vectors"))
        .unwrap_or(1 << 20);
    let n_runs: usize = args()
        .nth(2)
        .map(|s| s.parse().expect("second argument must be the number of runs"))
        .unwrap_or(10);

    println!("[BENCH] system time: {}", jiff::Timestamp::now());
    println!(
        "[BENCH] {} vectors, {} runs, simd feature: {}",
        n_vectors,
        n_runs,
        cfg!(feature = "simd")
    );

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(RNG_SEED);
    let mut random_vec4 = || Vec4::new(rng.random(), rng.random(), rng.random(), rng.random());

    let vectors_a = (0..n_vectors).map(|_| random_vec4()).collect::<Vec<_>>();
    let vectors_b = (0..n_vectors).map(|_| random_vec4()).collect::<Vec<_>>();

    let batches_a = to_batches(&vectors_a);
    let batches_b = to_batches(&vectors_b);

    let scalar_times = (0..n_runs)
        .map(|_| {
            let start = Instant::now();
            for (a, b) in vectors_a.iter().zip(vectors_b.iter()) {
                black_box(((*a + *b) * 0.5).normalized().dot(*b));
            }
            start.elapsed().as_secs_f32()
        })
        .collect::<Vec<_>>();

    let batched_times = (0..n_runs)
        .map(|_| {
            let start = Instant::now();
            for (a, b) in batches_a.iter().zip(batches_b.iter()) {
                black_box(((*a + *b) * 0.5).normalized().dot(b));
            }
            start.elapsed().as_secs_f32()
        })
        .collect::<Vec<_>>();

    print_stats("scalar Vec4", &scalar_times, n_vectors);
    print_stats("batched FourVec4", &batched_times, n_vectors);

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(RNG_SEED);
    let scene = Scene::random(&mut rng, &DEFAULT_CRACKITOS_CONFIG.scene_gen);
    let n_pairs = scene.shapes.len() * scene.shapes.len();
    let query_times = (0..n_runs)
        .map(|_| {
            let start = Instant::now();
            for s1 in &scene.shapes {
                for s2 in &scene.shapes {
                    black_box(s1.intersects(s2));
                }
            }
            start.elapsed().as_secs_f32()
        })
        .collect::<Vec<_>>();

    print_stats("shape intersections", &query_times, n_pairs);
    println!("[BENCH] system time: {}", jiff::Timestamp::now());
}

fn to_batches(vectors: &[Vec4]) -> Vec<FourVec4> {
    vectors
        .chunks_exact(LANES)
        .map(|c| FourVec4::from_vecs([c[0], c[1], c[2], c[3]]))
        .collect()
}

fn print_stats(label: &str, times: &[f32], n_items: usize) {
    let best = times
        .iter()
        .min_by_key(|&x| OrderedFloat(*x))
        .copied()
        .unwrap_or(f32::NAN);
    let worst = times
        .iter()
        .max_by_key(|&x| OrderedFloat(*x))
        .copied()
        .unwrap_or(f32::NAN);
    let avg = times.iter().sum::<f32>() / times.len() as f32;

    println!("---- {} ----", label);
    println!("best:   {:.3}ms", best * 1000.0);
    println!("worst:  {:.3}ms", worst * 1000.0);
    println!("avg:    {:.3}ms", avg * 1000.0);
    println!("rate:   {:.1} M/s", n_items as f32 / best / 1.0e6);
}
