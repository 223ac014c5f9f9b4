//! Wrap demo: Lay out a bag of differently sized chips and print the result.
//!
//! Run with `RUST_LOG=trace cargo run --example wrap_demo` to see the
//! per-child pass tracing.

use flowbox::{
    Element, FlowConfig, FlowContainer, HeadlessHost, Insets, MeasureSpec, Rect, Visibility,
};

fn main() {
    env_logger::init();

    let mut host = HeadlessHost::new();
    let mut container = FlowContainer::with_config(FlowConfig {
        item_spacing: 12,
        row_spacing: 8,
    })
    .with_padding(Insets::uniform(16));

    let chips = [
        (90, 32),
        (140, 32),
        (60, 48),
        (210, 32),
        (120, 32),
        (180, 40),
        (75, 32),
        (240, 32),
        (110, 32),
    ];
    for (i, &(width, height)) in chips.iter().enumerate() {
        let mut element = Element::new(width, height);
        // Hide one chip to show that hidden children still reserve space.
        if i == 4 {
            element = element.with_visibility(Visibility::Hidden);
        }
        container.push(host.insert(element));
    }

    let width = MeasureSpec::at_most(480);
    let height = MeasureSpec::unspecified();
    let plan = container
        .measure(&mut host, width, height)
        .expect("headless measurement cannot fail");

    println!(
        "desired size: {}x{} over {} rows",
        plan.desired.width,
        plan.desired.height,
        plan.rows.len()
    );

    container.position(&mut host, &plan, Rect::from_size(plan.desired));

    for (row_index, row) in plan.rows.iter().enumerate() {
        println!("row {row_index} (height {}, width {}):", row.height, row.width);
        for slot in &row.slots {
            let id = container.children()[slot.index];
            let bounds = host.bounds(id).expect("positioned during this pass");
            println!("  child {:>2} at {bounds:?}", slot.index);
        }
    }
}
