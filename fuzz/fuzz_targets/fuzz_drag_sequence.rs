#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use newsdesk_core::geometry::Rect;
use newsdesk_layout::{LayoutConfigRegistry, LayoutManager, LayoutMode, SIZE_EPSILON};

#[derive(Debug, Arbitrary)]
enum Op {
    Down { handle: u8, x: f64 },
    Move { x: f64 },
    MoveIn { x: f64, width: f64 },
    Up,
    CaptureLost,
    Width(f64),
    Mode(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut manager = LayoutManager::new(LayoutMode::ResearchCanvas);
    manager.observe_width(1000.0);
    let area = Rect::from_size(1000.0, 800.0);

    for op in ops.into_iter().take(512) {
        match op {
            Op::Down { handle, x } => {
                let _ = manager.handle_pointer_down(usize::from(handle % 4), x);
            }
            Op::Move { x } => {
                let _ = manager.handle_pointer_move(x);
            }
            Op::MoveIn { x, width } => {
                let _ = manager.handle_pointer_move_in(x, width);
            }
            Op::Up => {
                manager.handle_pointer_up();
                assert!(!manager.is_dragging(), "drag survived pointer-up");
            }
            Op::CaptureLost => {
                manager.handle_capture_lost();
                assert!(!manager.is_dragging(), "drag survived capture loss");
            }
            Op::Width(width) => {
                manager.observe_width(width);
            }
            Op::Mode(index) => {
                let mode = LayoutMode::ALL[usize::from(index) % LayoutMode::ALL.len()];
                manager.set_mode(mode);
                let initial = LayoutConfigRegistry::resolve(mode).initial_sizes();
                assert_eq!(manager.sizes(), initial.as_slice(), "mode switch kept old sizes");
            }
        }

        // Post-conditions that must hold after every event.
        let sizes = manager.sizes();
        assert_eq!(sizes.len(), manager.config().panel_count());
        let sum: f64 = sizes.iter().sum();
        assert!((sum - 100.0).abs() <= SIZE_EPSILON, "sum drifted: {sizes:?}");
        for (size, panel) in sizes.iter().zip(manager.config().panels) {
            assert!(
                size.is_finite() && *size >= panel.min_width_pct - SIZE_EPSILON,
                "{} below minimum: {sizes:?}",
                panel.key
            );
        }
        if let Some(controller) = manager.controller() {
            assert_eq!(controller.check_invariants(), Ok(()));
        }

        // Slots and handles tile the panel region left to right.
        let frame = manager.frame(area);
        assert_eq!(frame.slots.len(), sizes.len());
        if frame.slots.len() > 1 {
            let covered: f64 = frame.slots.iter().map(|s| s.rect.width).sum::<f64>()
                + frame.handles.iter().map(|h| h.rect.width).sum::<f64>();
            assert!(
                (covered - frame.panel_region.width).abs() < 1e-6,
                "frame covers {covered} of {}",
                frame.panel_region.width
            );
        }
        for pair in frame.slots.windows(2) {
            assert!(pair[0].rect.right() <= pair[1].rect.x + 1e-6, "slots overlap");
        }
    }
});
