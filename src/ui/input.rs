// PolyPlot - ui/input.rs
//
// Keyboard bindings. Translates egui key presses into app actions.

use crate::app::state::Action;
use crate::core::view::Direction;
use egui::Key;

/// Action bound to `key`, if any.
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Escape => Some(Action::Quit),
        Key::Space => Some(Action::TogglePause),
        Key::ArrowUp => Some(Action::Pan(Direction::Up)),
        Key::ArrowDown => Some(Action::Pan(Direction::Down)),
        Key::ArrowLeft => Some(Action::Pan(Direction::Left)),
        Key::ArrowRight => Some(Action::Pan(Direction::Right)),
        _ => None,
    }
}

/// All actions triggered this frame. Key repeat counts as another press.
pub fn collect_actions(ctx: &egui::Context) -> Vec<Action> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => action_for_key(*key),
                _ => None,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bound_key_has_an_action() {
        for key in [
            Key::Escape,
            Key::Space,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::ArrowLeft,
            Key::ArrowRight,
        ] {
            assert!(action_for_key(key).is_some(), "{key:?} unbound");
        }
    }

    #[test]
    fn test_bindings() {
        assert_eq!(action_for_key(Key::Escape), Some(Action::Quit));
        assert_eq!(action_for_key(Key::Space), Some(Action::TogglePause));
        assert_eq!(
            action_for_key(Key::ArrowLeft),
            Some(Action::Pan(Direction::Left))
        );
        assert_eq!(action_for_key(Key::Q), None);
        assert_eq!(action_for_key(Key::Enter), None);
    }

    fn key_event(key: Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_collect_actions_reads_presses_only() {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events: vec![
                key_event(Key::Space, true),
                key_event(Key::Space, false),
                key_event(Key::ArrowDown, true),
                key_event(Key::A, true),
            ],
            ..Default::default()
        };
        let mut actions = Vec::new();
        let _ = ctx.run(input, |ctx| {
            actions = collect_actions(ctx);
        });
        assert_eq!(
            actions,
            vec![Action::TogglePause, Action::Pan(Direction::Down)]
        );
    }
}
