//! Random command streams keep the shell's mode state and layout in step.

use newsdesk_core::event::{Event, PointerEvent};
use newsdesk_layout::{LayoutConfigRegistry, LayoutMode, SIZE_EPSILON};
use newsdesk_shell::{HistoryKind, Shell, ShellCommand, ShellConfig};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Command(ShellCommand),
    Drag { handle: usize, dx: f64 },
    Blur,
}

fn mode_strategy() -> impl Strategy<Value = LayoutMode> {
    prop::sample::select(LayoutMode::ALL.to_vec())
}

fn history_strategy() -> impl Strategy<Value = HistoryKind> {
    prop_oneof![Just(HistoryKind::Report), Just(HistoryKind::Canvas)]
}

fn command_strategy() -> impl Strategy<Value = ShellCommand> {
    prop_oneof![
        mode_strategy().prop_map(ShellCommand::ModeSwitch),
        Just(ShellCommand::ToggleCanvas),
        Just(ShellCommand::BackToHome),
        any::<bool>().prop_map(|deep_research| ShellCommand::SendMessage { deep_research }),
        Just(ShellCommand::DeepResearchCompleted),
        history_strategy().prop_map(ShellCommand::ShowHistory),
        Just(ShellCommand::HideHistory),
        history_strategy().prop_map(ShellCommand::SelectHistory),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => command_strategy().prop_map(Op::Command),
        3 => (0usize..2, -800.0f64..800.0).prop_map(|(handle, dx)| Op::Drag { handle, dx }),
        1 => Just(Op::Blur),
    ]
}

fn drag(shell: &mut Shell, handle: usize, dx: f64) {
    let frame = shell.frame();
    let Some(region) = frame.handles.get(handle) else {
        return;
    };
    let (x, y) = (region.rect.center_x(), region.rect.y + 5.0);
    shell.handle_event(&Event::Pointer(PointerEvent::down(x, y)));
    shell.handle_event(&Event::Pointer(PointerEvent::moved(x + dx, y)));
    shell.handle_event(&Event::Pointer(PointerEvent::up(x + dx, y)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn layout_tracks_mode_state(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut shell = Shell::new(ShellConfig::default()).unwrap();
        shell.handle_event(&Event::Resize { width: 1280.0, height: 720.0 });

        for op in ops {
            match op {
                Op::Command(command) => {
                    let transition = shell.dispatch(command);
                    match command {
                        ShellCommand::SendMessage { deep_research: true } => {
                            prop_assert!(shell.state().research_running());
                        }
                        ShellCommand::DeepResearchCompleted => {
                            prop_assert!(!shell.state().research_running());
                            prop_assert_eq!(shell.state().mode(), LayoutMode::Research);
                        }
                        _ => {}
                    }
                    if transition.mode_changed() {
                        let initial = LayoutConfigRegistry::resolve(transition.to).initial_sizes();
                        prop_assert_eq!(shell.layout().sizes(), initial.as_slice());
                    }
                }
                Op::Drag { handle, dx } => drag(&mut shell, handle, dx),
                Op::Blur => {
                    shell.handle_event(&Event::Focus(false));
                }
            }

            prop_assert_eq!(shell.layout().mode(), shell.state().mode());
            prop_assert!(!shell.layout().is_dragging());
            match shell.state().mode() {
                LayoutMode::ResearchCanvas => prop_assert!(shell.state().show_canvas()),
                LayoutMode::Research => prop_assert!(!shell.state().show_canvas()),
                LayoutMode::Home | LayoutMode::Chat => {}
            }
            let sum: f64 = shell.layout().sizes().iter().sum();
            prop_assert!((sum - 100.0).abs() <= SIZE_EPSILON);
        }
    }
}
