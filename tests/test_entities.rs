use zombie_defense::compute::init_state;
use zombie_defense::entities::*;

#[test]
fn entity_enums_compare() {
    assert_eq!(ZombieKind::Boss, ZombieKind::Boss);
    assert_ne!(ZombieKind::Normal, ZombieKind::Weak);
    assert_eq!(RapidFire::Active { until: 5 }, RapidFire::Active { until: 5 });
    assert_ne!(RapidFire::Active { until: 5 }, RapidFire::Inactive);
    assert_ne!(FireTrigger::Key, FireTrigger::Pointer);
}

#[test]
fn only_running_is_non_terminal() {
    assert!(!GameStatus::Running.is_terminal());
    assert!(GameStatus::Victory.is_terminal());
    assert!(GameStatus::Defeat.is_terminal());
}

#[test]
fn input_state_defaults_to_idle() {
    let input = InputState::default();
    assert!(!input.up && !input.down && !input.left && !input.right);
    assert!(!input.fire && !input.pointer_down);
    assert_eq!((input.pointer_x, input.pointer_y), (0.0, 0.0));
}

#[test]
fn session_clone_is_independent() {
    let original = init_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.warrior.x = 99.0;
    cloned.score = 999;
    cloned.zombies.push(Zombie {
        x: 5.0,
        y: 5.0,
        kind: ZombieKind::Normal,
        health: 5,
        max_health: 5,
        speed: 1.1,
        size: 30.0,
    });
    cloned.bullets.push(Bullet {
        x: 1.0,
        y: 1.0,
        angle: 0.0,
        speed: 10.0,
    });

    assert_eq!(original.warrior.x, 400.0);
    assert_eq!(original.score, 0);
    assert!(original.zombies.is_empty());
    assert!(original.bullets.is_empty());
}
