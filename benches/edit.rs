// Copyright 2019 The xi-editor Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use byterope::Rope;

const BLOCK: &str = "abcdefghijklmnopqrstuvwxyz012345";

fn build_rope(blocks: usize) -> Rope {
    let mut rope = Rope::new();
    for _ in 0..blocks {
        rope = rope.append(BLOCK);
    }
    rope
}

fn bench_append(c: &mut Criterion) {
    let rope = build_rope(32_768);
    c.bench_function("append 32 bytes to 1 MiB", |b| {
        b.iter(|| black_box(rope.append(BLOCK)))
    });
}

fn bench_insert_middle(c: &mut Criterion) {
    let rope = build_rope(32_768);
    let mid = rope.len() / 2;
    c.bench_function("insert 32 bytes mid 1 MiB", |b| {
        b.iter(|| black_box(rope.insert(mid, BLOCK).unwrap()))
    });
}

fn bench_delete_middle(c: &mut Criterion) {
    let rope = build_rope(32_768);
    let mid = rope.len() / 2;
    c.bench_function("delete 4 KiB mid 1 MiB", |b| {
        b.iter(|| black_box(rope.delete(mid, 4096).unwrap()))
    });
}

fn bench_read_at(c: &mut Criterion) {
    let rope = build_rope(32_768);
    let mut buf = vec![0u8; 64 * 1024];
    c.bench_function("read 64 KiB at 512 KiB", |b| {
        b.iter(|| {
            let n = rope.read_at(&mut buf, 512 * 1024).unwrap();
            black_box(n)
        })
    });
}

fn bench_equality(c: &mut Criterion) {
    let a = build_rope(32_768);
    let b_rope = Rope::from(a.to_bytes());
    c.bench_function("compare equal 1 MiB ropes", |bench| {
        bench.iter(|| black_box(a == b_rope))
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_insert_middle,
    bench_delete_middle,
    bench_read_at,
    bench_equality
);
criterion_main!(benches);
