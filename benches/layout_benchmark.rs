//! Layout benchmark: Measure and position cost over headless element trees.
//!
//! Target: a full measure + position pass over a few hundred children well
//! under a frame budget.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flowbox::{Element, ElementId, FlowContainer, HeadlessHost, MeasureSpec, Rect};

fn build(count: usize) -> (HeadlessHost, FlowContainer<ElementId>) {
    let mut host = HeadlessHost::new();
    let mut container = FlowContainer::new();
    for i in 0..count {
        let width = 40 + ((i * 37) % 200) as i32;
        let height = 16 + ((i * 13) % 48) as i32;
        container.push(host.insert(Element::new(width, height)));
    }
    (host, container)
}

fn measure_pass(c: &mut Criterion) {
    let (mut host, container) = build(400);
    let width = MeasureSpec::at_most(1080);
    let height = MeasureSpec::unspecified();

    c.bench_function("measure_400_children", |b| {
        b.iter(|| container.measure(black_box(&mut host), width, height).unwrap())
    });
}

fn position_pass(c: &mut Criterion) {
    let (mut host, container) = build(400);
    let width = MeasureSpec::at_most(1080);
    let height = MeasureSpec::unspecified();
    let plan = container.measure(&mut host, width, height).unwrap();
    let bounds = Rect::from_size(plan.desired);

    c.bench_function("position_400_children", |b| {
        b.iter(|| container.position(black_box(&mut host), black_box(&plan), bounds))
    });
}

fn full_pass(c: &mut Criterion) {
    let (mut host, container) = build(400);
    let width = MeasureSpec::at_most(1080);
    let height = MeasureSpec::unspecified();

    c.bench_function("measure_and_position_400_children", |b| {
        b.iter(|| {
            let plan = container.measure(black_box(&mut host), width, height).unwrap();
            container.position(&mut host, &plan, Rect::from_size(plan.desired));
        })
    });
}

criterion_group!(benches, measure_pass, position_pass, full_pass);
criterion_main!(benches);
