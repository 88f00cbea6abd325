use crossterm::style::Color;

use triangle_shooter::compute::init_state;
use triangle_shooter::config::Config;
use triangle_shooter::entities::*;
use triangle_shooter::render::*;

/// Records every drawing call so frames can be checked without a terminal.
#[derive(Debug, Default)]
struct Recorder {
    ops: Vec<Op>,
    align: TextAlign,
}

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Rect(Rect, Color),
    Triangle([(f32, f32); 3], Color),
    Text {
        text: String,
        x: f32,
        y: f32,
        font_px: f32,
        align: TextAlign,
    },
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::Rect(rect, color));
    }

    fn fill_triangle(&mut self, points: [(f32, f32); 3], color: Color) {
        self.ops.push(Op::Triangle(points, color));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, _color: Color) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
            font_px,
            align: self.align,
        });
    }
}

fn texts(rec: &Recorder) -> Vec<&str> {
    rec.ops
        .iter()
        .filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn make_state() -> GameState {
    init_state(Config::default())
}

#[test]
fn frame_starts_with_clear_then_player_triangle() {
    let s = make_state();
    let mut rec = Recorder::default();
    render(&mut rec, &s);

    assert_eq!(rec.ops[0], Op::Clear);
    // Player at (225, 610, 30, 30): apex at the middle of the top edge
    assert_eq!(
        rec.ops[1],
        Op::Triangle([(225.0, 640.0), (240.0, 610.0), (255.0, 640.0)], C_PLAYER)
    );
}

#[test]
fn projectiles_and_enemies_drawn_as_rects() {
    let mut s = make_state();
    s.projectiles.push(Projectile {
        rect: Rect::new(50.0, 60.0, 5.0, 10.0),
    });
    s.enemies.push(Enemy {
        rect: Rect::new(100.0, 100.0, 20.0, 20.0),
    });
    s.enemies.push(Enemy {
        rect: Rect::new(200.0, 150.0, 20.0, 20.0),
    });
    let mut rec = Recorder::default();
    render(&mut rec, &s);

    let rects: Vec<&Op> = rec.ops.iter().filter(|op| matches!(op, Op::Rect(..))).collect();
    assert_eq!(rects.len(), 3);
    assert_eq!(*rects[0], Op::Rect(Rect::new(50.0, 60.0, 5.0, 10.0), C_PROJECTILE));
    assert_eq!(*rects[1], Op::Rect(Rect::new(100.0, 100.0, 20.0, 20.0), C_ENEMY));
}

#[test]
fn score_overlay_in_top_left() {
    let mut s = make_state();
    s.score = 120;
    let mut rec = Recorder::default();
    render(&mut rec, &s);

    assert_eq!(texts(&rec), vec!["Score: 120"]);
    assert!(rec.ops.contains(&Op::Text {
        text: "Score: 120".to_string(),
        x: 10.0,
        y: 20.0,
        font_px: 20.0,
        align: TextAlign::Left,
    }));
}

#[test]
fn game_over_overlay_centred_and_alignment_restored() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    let mut rec = Recorder::default();
    render(&mut rec, &s);

    assert_eq!(texts(&rec), vec!["Score: 0", "GAME OVER", "Press Enter to Retry"]);
    assert!(rec.ops.contains(&Op::Text {
        text: "GAME OVER".to_string(),
        x: 240.0,
        y: 300.0,
        font_px: 40.0,
        align: TextAlign::Center,
    }));
    assert!(rec.ops.contains(&Op::Text {
        text: "Press Enter to Retry".to_string(),
        x: 240.0,
        y: 340.0,
        font_px: 20.0,
        align: TextAlign::Center,
    }));
    assert_eq!(rec.align, TextAlign::Left);
}

#[test]
fn render_does_not_touch_state() {
    let mut s = make_state();
    s.enemies.push(Enemy {
        rect: Rect::new(1.0, 2.0, 20.0, 20.0),
    });
    let before = s.clone();
    render(&mut Recorder::default(), &s);
    assert_eq!(s, before);
}
