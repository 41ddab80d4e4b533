use pixel_painter::app::{App, Event};
use pixel_painter::config::Config;
use pixel_painter::surface::FillTarget;
use pixel_painter::types::{CanvasSize, Color, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn fresh(width: u32, height: u32) -> App {
    App::new(CanvasSize::new(width, height), &Config::default())
}

fn non_white(app: &App) -> Vec<(u32, u32, Color)> {
    let backing = app.canvas().backing();
    let (w, h) = backing.dimensions();
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let c = backing.pixel(x, y);
            if c != Color::WHITE {
                out.push((x, y, c));
            }
        }
    }
    out
}

/// A point up to 20 px past any edge of a 120x90 canvas.
fn spilling_point(rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(-20..140), rng.gen_range(-20..110))
}

#[test]
fn surfaces_stay_identical_through_random_strokes() {
    let mut app = fresh(120, 90);
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..40 {
        let color = Color::rgb(rng.r#gen(), rng.r#gen(), rng.r#gen());
        app.dispatch(Event::ColorPicked(color)).unwrap();
        let size: u32 = rng.gen_range(1..=30);
        app.dispatch(Event::SizeCommitted(size.to_string())).unwrap();
        assert_eq!(app.brush().size(), size);

        app.dispatch(Event::PointerDown(spilling_point(&mut rng))).unwrap();
        assert!(app.canvas().surfaces_agree());
        for _ in 0..rng.gen_range(0..6) {
            app.dispatch(Event::PointerMove(spilling_point(&mut rng))).unwrap();
            assert!(app.canvas().surfaces_agree());
        }
        app.dispatch(Event::PointerUp).unwrap();
    }
    assert!(!non_white(&app).is_empty());
}

#[test]
fn size_25_click_paints_exact_square() {
    let mut app = fresh(300, 300);
    app.dispatch(Event::SizeCommitted("25".into())).unwrap();
    assert_eq!(app.brush().size(), 25);
    app.dispatch(Event::PointerDown(Point::new(100, 100))).unwrap();

    let painted = non_white(&app);
    assert_eq!(painted.len(), 25 * 25);
    assert!(painted.iter().all(|&(x, y, c)| {
        (88..113).contains(&x) && (88..113).contains(&y) && c == Color::BLACK
    }));
}

#[test]
fn rejected_sizes_keep_the_brush() {
    let mut app = fresh(100, 100);
    for input in ["abc", "0", "-5", "1.5"] {
        app.dispatch(Event::SizeCommitted(input.into())).unwrap();
        assert_eq!(app.brush().size(), 18, "input {input:?}");
        assert_eq!(app.size_text(), "18");
    }
}

#[test]
fn clear_wipes_every_stroke() {
    let mut app = fresh(200, 150);
    for x in (0..200).step_by(15) {
        app.dispatch(Event::PointerDown(Point::new(x, x / 2))).unwrap();
        app.dispatch(Event::PointerMove(Point::new(x + 5, 140))).unwrap();
        app.dispatch(Event::PointerUp).unwrap();
    }
    assert!(!non_white(&app).is_empty());

    app.dispatch(Event::ClearRequested).unwrap();
    assert_eq!(app.canvas().backing().dimensions(), (200, 150));
    assert!(non_white(&app).is_empty());
    assert!(app.canvas().surfaces_agree());
}

#[test]
fn edge_strokes_are_clipped_not_shifted() {
    let mut app = fresh(100, 100);
    app.dispatch(Event::PointerDown(Point::new(0, 0))).unwrap();
    let painted = non_white(&app);
    // 18px block at (0,0) spans [-9, 9); only the on-canvas quarter remains.
    assert_eq!(painted.len(), 9 * 9);
    assert!(painted.iter().all(|&(x, y, _)| x < 9 && y < 9));
}
