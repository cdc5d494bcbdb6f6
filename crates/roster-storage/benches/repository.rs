use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use roster_core::model::Student;
use roster_core::traits::StudentRepository;
use roster_storage::InMemoryStudentRepository;

fn populated(n: usize) -> InMemoryStudentRepository {
    let mut repo = InMemoryStudentRepository::new();
    for i in 0..n {
        let student = Student::new(format!("Student {i}"), (i % 101) as f64).unwrap();
        repo.add(student).unwrap();
    }
    repo
}

fn bench_find_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_name");
    for n in [100, 1_000, 10_000] {
        let repo = populated(n);
        let last = format!("Student {}", n - 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &last, |b, name| {
            b.iter(|| repo.find_by_name(black_box(name)).unwrap())
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for n in [100, 1_000, 10_000] {
        let repo = populated(n);
        let name = format!("STUDENT {}", n / 2);
        let grade = ((n / 2) % 101) as f64;
        group.bench_with_input(BenchmarkId::from_parameter(n), &repo, |b, repo| {
            b.iter_batched(
                || repo.clone(),
                |mut r| r.remove(black_box(&name), black_box(grade)).unwrap(),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_find_all(c: &mut Criterion) {
    let repo = populated(1_000);
    c.bench_function("find_all_1000", |b| b.iter(|| repo.find_all().unwrap()));
}

criterion_group!(benches, bench_find_by_name, bench_remove, bench_find_all);
criterion_main!(benches);
