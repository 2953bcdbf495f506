//! Benchmarks for zip and unzip throughput.
//!
//! Measures directory archiving across tree sizes and extraction of the
//! resulting archives.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hostkit_core::creation::walker::collect_files;
use hostkit_core::unzip;
use hostkit_core::zip_directory;
use hostkit_core::zip_file;
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a directory with `file_count` files of 1 KB spread over a few
/// subdirectories.
fn create_test_directory(temp: &TempDir, file_count: usize) -> PathBuf {
    let dir = temp.path().join("bench_data");
    let content = "x".repeat(1024);

    for i in 0..file_count {
        let sub = dir.join(format!("group_{}", i % 8));
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(format!("file_{i}.txt")), &content).unwrap();
    }

    dir
}

fn bench_zip_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip_directory");

    for file_count in [10, 100, 1000] {
        let temp = TempDir::new().unwrap();
        let source = create_test_directory(&temp, file_count);
        let output = temp.path().join("out.zip");

        group.throughput(Throughput::Bytes((file_count * 1024) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &file_count,
            |b, _| {
                b.iter(|| zip_directory(black_box(&source), black_box(&output)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_zip_large_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip_file");

    for size_mb in [1usize, 10] {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("large.bin");
        let data: Vec<u8> = (0..size_mb * 1024 * 1024).map(|i| (i % 251) as u8).collect();
        fs::write(&source, &data).unwrap();
        let output = temp.path().join("large.zip");

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size_mb}MB")),
            &size_mb,
            |b, _| {
                b.iter(|| zip_file(black_box(&source), black_box(&output)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_unzip(c: &mut Criterion) {
    let mut group = c.benchmark_group("unzip");

    for file_count in [10, 100, 1000] {
        let temp = TempDir::new().unwrap();
        let source = create_test_directory(&temp, file_count);
        let archive = temp.path().join("bench.zip");
        zip_directory(&source, &archive).unwrap();

        group.throughput(Throughput::Bytes((file_count * 1024) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &file_count,
            |b, _| {
                b.iter(|| {
                    let out = TempDir::new().unwrap();
                    unzip(black_box(&archive), out.path()).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let source = create_test_directory(&temp, 1000);

    c.bench_function("collect_files_1000", |b| {
        b.iter(|| collect_files(black_box(&source), None).unwrap().len());
    });
}

criterion_group!(
    benches,
    bench_zip_directory,
    bench_zip_large_file,
    bench_unzip,
    bench_walk
);
criterion_main!(benches);
