//! Property/fuzz-style invariants for divider drags.
//!
//! Random pointer streams (including duplicate ups, lost captures, zero
//! widths and mode switches mid-drag) are fed to a `LayoutManager`; after
//! every event the sizes must sum to 100 and respect every minimum, and the
//! rendered frame must tile the panel region exactly.

use newsdesk_layout::{
    LayoutConfigRegistry, LayoutError, LayoutManager, LayoutMode, Rect, ResizeError, SIZE_EPSILON,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        min + unit * (max - min)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Down { handle: usize, x: f64 },
    Move { x: f64 },
    MoveIn { x: f64, width: f64 },
    Up,
    CaptureLost,
    Width(f64),
    Mode(LayoutMode),
}

fn random_step(manager: &LayoutManager, rng: &mut Lcg) -> Step {
    let handles = manager.config().handle_count().max(1);
    match rng.next_u64() % 16 {
        0..=2 => Step::Down {
            handle: rng.choose_index(handles + 1),
            x: rng.next_f64(-200.0, 2200.0),
        },
        3..=8 => Step::Move {
            x: rng.next_f64(-4000.0, 6000.0),
        },
        9 => Step::MoveIn {
            x: rng.next_f64(-4000.0, 6000.0),
            width: if rng.next_u64() % 3 == 0 {
                0.0
            } else {
                rng.next_f64(1.0, 3000.0)
            },
        },
        10 | 11 => Step::Up,
        12 => Step::CaptureLost,
        13 => Step::Width(if rng.next_u64() % 4 == 0 {
            0.0
        } else {
            rng.next_f64(200.0, 3000.0)
        }),
        _ => Step::Mode(LayoutMode::ALL[rng.choose_index(LayoutMode::ALL.len())]),
    }
}

fn apply(manager: &mut LayoutManager, step: Step) {
    match step {
        Step::Down { handle, x } => match manager.handle_pointer_down(handle, x) {
            Ok(()) => assert!(manager.is_dragging()),
            Err(LayoutError::NotResizable { .. })
            | Err(LayoutError::Resize(ResizeError::HandleOutOfRange { .. }))
            | Err(LayoutError::Resize(ResizeError::DragAlreadyInProgress { .. })) => {}
            Err(other) => panic!("unexpected drag start error: {other}"),
        },
        Step::Move { x } => {
            let _ = manager.handle_pointer_move(x);
        }
        Step::MoveIn { x, width } => {
            let _ = manager.handle_pointer_move_in(x, width);
        }
        Step::Up => {
            manager.handle_pointer_up();
            assert!(!manager.is_dragging());
        }
        Step::CaptureLost => {
            manager.handle_capture_lost();
            assert!(!manager.is_dragging());
        }
        Step::Width(width) => {
            manager.observe_width(width);
        }
        Step::Mode(mode) => {
            manager.set_mode(mode);
            let expected = LayoutConfigRegistry::resolve(mode).initial_sizes();
            assert_eq!(manager.sizes(), expected.as_slice());
        }
    }
}

fn assert_size_invariants(manager: &LayoutManager) {
    let sizes = manager.sizes();
    let config = manager.config();
    assert_eq!(sizes.len(), config.panel_count());
    let sum: f64 = sizes.iter().sum();
    assert!(
        (sum - 100.0).abs() <= SIZE_EPSILON,
        "sizes {sizes:?} sum to {sum}"
    );
    for (size, panel) in sizes.iter().zip(config.panels) {
        assert!(
            *size >= panel.min_width_pct - SIZE_EPSILON,
            "panel {} at {size} below minimum {}",
            panel.key,
            panel.min_width_pct
        );
    }
    if let Some(controller) = manager.controller() {
        assert_eq!(controller.check_invariants(), Ok(()));
    }
}

fn assert_frame_tiles(manager: &LayoutManager, area: Rect) {
    let frame = manager.frame(area);
    assert_eq!(frame.slots.len(), manager.config().panel_count());
    let covered: f64 = frame.slots.iter().map(|s| s.rect.width).sum::<f64>()
        + frame.handles.iter().map(|h| h.rect.width).sum::<f64>();
    if frame.slots.len() > 1 {
        assert!(
            (covered - frame.panel_region.width).abs() < 1e-6,
            "frame covers {covered} of {}",
            frame.panel_region.width
        );
    }
    for pair in frame.slots.windows(2) {
        assert!(pair[0].rect.right() <= pair[1].rect.x + 1e-6);
    }
}

fn run_sequence(seed: u64, steps: usize) -> LayoutManager {
    let mut rng = Lcg::new(seed);
    let mut manager = LayoutManager::new(LayoutMode::ResearchCanvas);
    manager.observe_width(1000.0);
    let area = Rect::from_size(1000.0, 800.0);

    for _ in 0..steps {
        let step = random_step(&manager, &mut rng);
        apply(&mut manager, step);
        assert_size_invariants(&manager);
        assert_frame_tiles(&manager, area);
    }
    manager
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_pointer_streams_preserve_size_invariants(
        seed in any::<u64>(),
        steps in 20usize..200,
    ) {
        let manager = run_sequence(seed, steps);
        assert_size_invariants(&manager);
    }

    #[test]
    fn single_drag_stays_within_pair_bounds(
        start in 0.0f64..1000.0,
        pointer in -5000.0f64..5000.0,
        width in 1.0f64..4000.0,
    ) {
        let mut manager = LayoutManager::new(LayoutMode::Research);
        manager.handle_pointer_down(0, start).unwrap();
        manager.handle_pointer_move_in(pointer, width).unwrap();
        let sizes = manager.sizes();
        prop_assert!(sizes[0] >= 40.0 - SIZE_EPSILON);
        prop_assert!(sizes[0] <= 70.0 + SIZE_EPSILON);
        prop_assert!((sizes[0] + sizes[1] - 100.0).abs() <= SIZE_EPSILON);
    }

    #[test]
    fn unrelated_panels_are_untouched(
        handle in 0usize..2,
        pointer in -5000.0f64..5000.0,
    ) {
        let mut manager = LayoutManager::new(LayoutMode::ResearchCanvas);
        manager.handle_pointer_down(handle, 500.0).unwrap();
        manager.handle_pointer_move_in(pointer, 1000.0).unwrap();
        let untouched = if handle == 0 { 2 } else { 0 };
        let initial = [50.0, 25.0, 25.0];
        prop_assert_eq!(manager.sizes()[untouched], initial[untouched]);
    }
}

#[test]
fn drag_seed_corpus_preserves_invariants() {
    let seeds = [
        0_u64,
        1,
        2,
        3,
        5,
        8,
        13,
        21,
        34,
        55,
        89,
        144,
        u32::MAX as u64,
        (u32::MAX as u64) + 1,
        u64::MAX - 1,
        u64::MAX,
    ];

    for seed in seeds {
        let manager = run_sequence(seed, 300);
        assert_size_invariants(&manager);
    }
}

#[test]
fn non_finite_inputs_leave_sizes_valid() {
    let area = Rect::from_size(1000.0, 800.0);
    let mut manager = LayoutManager::new(LayoutMode::ResearchCanvas);
    manager.observe_width(f64::INFINITY);

    assert_eq!(
        manager.handle_pointer_down(0, f64::NAN),
        Err(LayoutError::Resize(ResizeError::NonFinitePointer))
    );
    assert!(!manager.is_dragging());

    manager.handle_pointer_down(1, 500.0).unwrap();
    for (x, width) in [
        (f64::NAN, 1000.0),
        (f64::INFINITY, 1000.0),
        (f64::NEG_INFINITY, 1000.0),
        (600.0, f64::NAN),
        (600.0, f64::INFINITY),
        (600.0, -1000.0),
        (f64::MAX, f64::MIN_POSITIVE),
    ] {
        let _ = manager.handle_pointer_move_in(x, width);
        assert_size_invariants(&manager);
        assert_frame_tiles(&manager, area);
    }
    let _ = manager.handle_pointer_move(f64::MAX);
    assert_size_invariants(&manager);

    manager.handle_pointer_up();
    manager.set_mode(LayoutMode::Research);
    assert_eq!(manager.sizes(), &[60.0, 40.0]);
}
