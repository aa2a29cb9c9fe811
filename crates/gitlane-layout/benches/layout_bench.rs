// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gitlane_git::Commit;
use gitlane_layout::{apply_lane_layout, compute_lane_layout};

/// A mainline with a feature branch forking every `fork_every` commits and
/// merging back `branch_len` commits later
fn branchy_history(len: usize, fork_every: usize, branch_len: usize) -> Vec<Commit> {
    let mut commits = Vec::with_capacity(len * 2);
    for i in 0..len {
        let main = format!("m{i}");
        let mut parents = Vec::new();
        if i + 1 < len {
            parents.push(format!("m{}", i + 1));
        }
        let merges_branch = i % fork_every == 0 && i + branch_len < len;
        if merges_branch {
            parents.push(format!("b{i}-0"));
        }
        commits.push(Commit::new(main, parents));

        if merges_branch {
            for j in 0..branch_len {
                let parent = if j + 1 < branch_len {
                    format!("b{i}-{}", j + 1)
                } else {
                    format!("m{}", i + branch_len)
                };
                commits.push(Commit::new(format!("b{i}-{j}"), [parent]));
            }
        }
    }
    commits
}

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_lane_layout");
    for len in [500usize, 2_000, 5_000] {
        let commits = branchy_history(len, 7, 5);
        group.bench_with_input(BenchmarkId::from_parameter(len), &commits, |b, commits| {
            b.iter(|| compute_lane_layout(std::hint::black_box(commits)))
        });
    }
    group.finish();

    let commits = branchy_history(2_000, 7, 5);
    let layout = compute_lane_layout(&commits);
    c.bench_function("apply_lane_layout/2000", |b| {
        b.iter(|| apply_lane_layout(std::hint::black_box(&commits), &layout))
    });
}

criterion_group!(benches, layout_benchmark);
criterion_main!(benches);
