// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Competing style requests on one stack.
//!
//! Three requesters ask for different styles; the strongest one is shown and
//! the change handler only runs when the shown style changes.
//!
//! Run:
//! - `cargo run -p reticle_demos --example style_stack_basics`
//! - `RUST_LOG=debug cargo run -p reticle_demos --example style_stack_basics`

use std::cell::RefCell;
use std::rc::Rc;

use reticle_style::{SharedStyleStack, StyleStack};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let styles = SharedStyleStack::new(StyleStack::new());
    let shown = Rc::new(RefCell::new(Vec::new()));
    let log = shown.clone();
    styles.set_change_handler(move |style| {
        println!("  canvas cursor -> {style}");
        log.borrow_mut().push(style.to_owned());
    });

    let button = styles.register_key();
    let drag = styles.register_key();
    let loader = styles.register_key();

    println!("== hover a button ==");
    styles.set_style(button, "pointer").unwrap();

    println!("== start dragging (stronger) ==");
    styles.set_style(drag, "grabbing").unwrap();

    println!("== button re-requests, nothing changes ==");
    styles.set_style(button, "pointer").unwrap();

    println!("== loader asks for wait (strongest) ==");
    styles.set_style(loader, "wait").unwrap();

    println!("== unknown style is rejected ==");
    if let Err(e) = styles.set_style(button, "sparkles") {
        println!("  rejected: {e}");
    }

    println!("== everyone lets go ==");
    styles.clear_style(loader);
    styles.clear_style(drag);

    assert_eq!(
        *shown.borrow(),
        vec!["pointer", "grabbing", "wait", "grabbing", "default"]
    );
    assert_eq!(styles.effective_style(), "default");
}
