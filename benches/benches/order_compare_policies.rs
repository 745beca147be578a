// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use coppice_tree::{Forest, Node, NodeFlags};
use coppice_view::level::render_level;
use coppice_view::order::ordered_view;
use coppice_view::types::{NullRegistry, SortPolicy, TreeContext};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

// One flat level of `n` siblings with scrambled labels; roughly one third droppable.
fn gen_siblings(n: usize) -> Forest<u64> {
    let mut f = Forest::new();
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for id in 1..=n as u64 {
        let tag = rng.next_u64() % 1_000_000;
        let flags = if tag % 3 == 0 {
            NodeFlags::DROPPABLE
        } else {
            NodeFlags::empty()
        };
        f.push(Node::new(id, 0, format!("item-{tag:06}")).with_flags(flags));
    }
    f
}

fn by_id(a: &Node<u64>, b: &Node<u64>) -> core::cmp::Ordering {
    a.id.cmp(&b.id)
}

fn bench_ordered_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_view");
    for &n in &[64usize, 512, 4096] {
        let forest = gen_siblings(n);
        group.throughput(Throughput::Elements(n as u64));
        for (name, sort) in [
            ("natural", SortPolicy::Natural),
            ("custom", SortPolicy::With(by_id)),
            ("disabled", SortPolicy::Disabled),
        ] {
            group.bench_function(format!("{name}_n{n}"), |b| {
                b.iter_batched(
                    || forest.children(0).collect::<Vec<_>>(),
                    |nodes| black_box(ordered_view(nodes, false, &sort)),
                    BatchSize::SmallInput,
                )
            });
            group.bench_function(format!("{name}_grouped_n{n}"), |b| {
                b.iter_batched(
                    || forest.children(0).collect::<Vec<_>>(),
                    |nodes| black_box(ordered_view(nodes, true, &sort)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_render_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_level");
    for &n in &[64usize, 512, 4096] {
        let forest = gen_siblings(n);
        let ctx = TreeContext::new(&forest, 0).with_droppable_first(true);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("grouped_natural_n{n}"), |b| {
            b.iter(|| {
                let view = render_level(&ctx, 0, 0, &mut NullRegistry);
                black_box(view.entries.len());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ordered_view, bench_render_level);
criterion_main!(benches);
