use triangle_shooter::compute::init_state;
use triangle_shooter::config::Config;
use triangle_shooter::entities::*;

#[test]
fn overlapping_rects_detected() {
    // enemy at (100,100,20,20), projectile at (105,105,5,10)
    let enemy = Rect::new(100.0, 100.0, 20.0, 20.0);
    let projectile = Rect::new(105.0, 105.0, 5.0, 10.0);
    assert!(enemy.overlaps(&projectile));
    assert!(projectile.overlaps(&enemy));
}

#[test]
fn edge_touching_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!a.overlaps(&right));
    assert!(!a.overlaps(&below));
}

#[test]
fn disjoint_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let far = Rect::new(50.0, 50.0, 5.0, 5.0);
    assert!(!a.overlaps(&far));
}

#[test]
fn contained_rect_overlaps() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn player_spawns_centred_on_bottom_edge() {
    let config = Config::default(); // 480×640, player 30
    let p = Player::spawn(&config);
    assert_eq!(p.rect, Rect::new(225.0, 610.0, 30.0, 30.0));
}

#[test]
fn is_over_follows_status() {
    let mut s = init_state(Config::default());
    assert!(!s.is_over());
    s.status = GameStatus::GameOver;
    assert!(s.is_over());
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Config::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        rect: Rect::new(5.0, 5.0, 20.0, 20.0),
    });

    assert_eq!(original.player.rect.x, 225.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
