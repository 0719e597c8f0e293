//=========================================================================
// Game View Integration Tests
//=========================================================================
//
// Drives the public GameView API the way the core thread does: ordered
// input events, then one advance() per frame.
//
//=========================================================================

use parallax_runner::core::sim::max_camera_x;
use parallax_runner::prelude::*;

//--- Test Helpers ---------------------------------------------------------

fn mounted(preset: WorldPreset) -> GameView {
    let mut view = GameView::new(&GameConfig::from_preset(preset));
    view.handle_event(&InputEvent::FocusChanged { focused: true });
    view
}

fn press(view: &mut GameView, key: KeyCode) {
    view.handle_event(&InputEvent::KeyDown { key });
}

fn release(view: &mut GameView, key: KeyCode) {
    view.handle_event(&InputEvent::KeyUp { key });
}

fn assert_within_bounds(view: &GameView) {
    let state = view.state();
    let world = view.physics().world_width;
    let max_camera = max_camera_x(world, view.viewport_width());

    assert!(state.player_x >= 50.0 && state.player_x <= world - 50.0, "player_x {}", state.player_x);
    assert!(state.camera_x >= 0.0 && state.camera_x <= max_camera, "camera_x {}", state.camera_x);
    assert!(state.player_y <= view.physics().ground_y, "player_y {}", state.player_y);
}

//=========================================================================
// Bounds
//=========================================================================

#[test]
fn bounds_hold_across_a_full_run() {
    for preset in [WorldPreset::Compact, WorldPreset::Decorated] {
        let mut view = mounted(preset);
        view.set_viewport_width(1024.0);

        // Run right past the world end, jumping along the way
        press(&mut view, KeyCode::ArrowRight);
        for frame in 0..2000 {
            if frame % 90 == 0 {
                press(&mut view, KeyCode::Space);
            } else {
                release(&mut view, KeyCode::Space);
            }
            view.advance();
            assert_within_bounds(&view);
        }
        assert_eq!(view.state().player_x, view.physics().world_width - 50.0);

        // And back past the start, switching viewport midway
        release(&mut view, KeyCode::ArrowRight);
        press(&mut view, KeyCode::KeyA);
        for frame in 0..2000 {
            if frame == 500 {
                view.set_viewport_width(640.0);
            }
            view.advance();
            assert_within_bounds(&view);
        }
        assert_eq!(view.state().player_x, 50.0);
        assert_eq!(view.state().camera_x, 0.0);
    }
}

#[test]
fn narrow_world_pins_camera() {
    let config = GameConfig {
        physics: PhysicsConfig {
            world_width: 600.0,
            ..WorldPreset::Compact.physics()
        },
        ..GameConfig::default()
    };
    let mut view = GameView::new(&config);
    view.handle_event(&InputEvent::FocusChanged { focused: true });
    view.set_viewport_width(1024.0);

    press(&mut view, KeyCode::ArrowRight);
    for _ in 0..200 {
        view.advance();
        assert_eq!(view.state().camera_x, 0.0);
    }
    assert_eq!(view.state().player_x, 550.0);
}

//=========================================================================
// Jumping
//=========================================================================

#[test]
fn jump_round_trip_returns_to_ground() {
    let mut view = mounted(WorldPreset::Compact);
    let ground = view.physics().ground_y;

    press(&mut view, KeyCode::ArrowUp);
    view.advance();
    release(&mut view, KeyCode::ArrowUp);

    // Rising phase
    let mut previous = view.state().player_y;
    for _ in 0..5 {
        view.advance();
        assert!(view.state().player_y < previous);
        previous = view.state().player_y;
    }

    // Falls back within a bounded number of frames
    let mut frames = 0;
    while view.state().is_jumping {
        view.advance();
        frames += 1;
        assert!(frames < 1000, "Never landed");
    }

    let state = view.state();
    assert_eq!(state.player_y, ground);
    assert_eq!(state.velocity_y, 0.0);
    assert!(!state.is_jumping);
}

#[test]
fn holding_jump_bounces_after_landing() {
    let mut view = mounted(WorldPreset::Compact);
    press(&mut view, KeyCode::Space);

    let mut landings = 0;
    let mut was_jumping = false;
    for _ in 0..200 {
        view.advance();
        let jumping = view.state().is_jumping;
        if was_jumping && !jumping {
            landings += 1;
        }
        was_jumping = jumping;
    }

    // Each landing frame is followed by a new jump on the next frame
    assert!(landings >= 2);
}

//=========================================================================
// Focus & Keys
//=========================================================================

#[test]
fn unfocused_view_ignores_key_down_but_applies_key_up() {
    let mut view = GameView::new(&GameConfig::default());

    press(&mut view, KeyCode::ArrowRight);
    assert!(view.held().is_empty());

    view.handle_event(&InputEvent::FocusChanged { focused: true });
    press(&mut view, KeyCode::ArrowRight);
    view.handle_event(&InputEvent::FocusChanged { focused: false });
    release(&mut view, KeyCode::ArrowRight);

    assert!(view.held().is_empty(), "Key-up applies while unfocused");
}

#[test]
fn unfocused_advance_freezes_state() {
    let mut view = mounted(WorldPreset::Compact);
    press(&mut view, KeyCode::Space);
    view.advance();
    let airborne = *view.state();

    view.handle_event(&InputEvent::FocusChanged { focused: false });
    for _ in 0..30 {
        assert!(!view.advance());
    }

    assert_eq!(*view.state(), airborne);
}

#[test]
fn repeated_key_down_is_idempotent() {
    let mut view = mounted(WorldPreset::Compact);

    for _ in 0..5 {
        press(&mut view, KeyCode::KeyD);
    }
    view.advance();

    assert_eq!(view.held().len(), 1);
    assert_eq!(view.state().player_x, 156.0);
}

#[test]
fn views_do_not_share_held_keys() {
    let mut first = mounted(WorldPreset::Compact);
    let second = mounted(WorldPreset::Compact);

    press(&mut first, KeyCode::ArrowLeft);

    assert!(first.held().is_held(Token::Left));
    assert!(second.held().is_empty());
}

#[test]
fn custom_bindings_drive_movement() {
    let mut bindings = KeyBindings::empty();
    bindings.bind(KeyCode::KeyS, Token::Right);

    let mut view = GameView::with_bindings(&GameConfig::default(), bindings);
    view.handle_event(&InputEvent::FocusChanged { focused: true });

    press(&mut view, KeyCode::ArrowRight);
    press(&mut view, KeyCode::KeyS);
    view.advance();

    assert_eq!(view.state().player_x, 156.0);
    assert_eq!(view.held().len(), 1);
}

#[test]
fn releasing_one_alias_keeps_moving() {
    let mut view = mounted(WorldPreset::Compact);

    press(&mut view, KeyCode::ArrowLeft);
    press(&mut view, KeyCode::KeyA);
    release(&mut view, KeyCode::KeyA);
    view.advance();

    assert_eq!(view.state().player_x, 144.0);
    assert!(view.state().is_running);

    release(&mut view, KeyCode::ArrowLeft);
    view.advance();
    assert_eq!(view.state().player_x, 144.0);
    assert!(!view.state().is_running);
}
