use eframe_sketchpad::{Canvas, PixelPos};
use egui::Color32;

fn painted(canvas: &Canvas, x: i32, y: i32) -> bool {
    canvas.get(PixelPos::new(x, y)) != Some(canvas.background())
}

#[test]
fn test_new_canvas_is_background() {
    let canvas = Canvas::new(30, 20, Color32::WHITE);
    assert_eq!(canvas.width(), 30);
    assert_eq!(canvas.height(), 20);
    assert_eq!(canvas.pixels().len(), 600);
    assert!(canvas.pixels().iter().all(|&p| p == Color32::WHITE));
}

#[test]
fn test_get_outside_is_none() {
    let canvas = Canvas::new(10, 10, Color32::WHITE);
    assert_eq!(canvas.get(PixelPos::new(-1, 0)), None);
    assert_eq!(canvas.get(PixelPos::new(0, 10)), None);
    assert_eq!(canvas.get(PixelPos::new(10, 0)), None);
    assert_eq!(canvas.get(PixelPos::new(9, 9)), Some(Color32::WHITE));
}

#[test]
fn test_fill() {
    let mut canvas = Canvas::new(8, 8, Color32::WHITE);
    canvas.fill(Color32::BLUE);
    assert!(canvas.pixels().iter().all(|&p| p == Color32::BLUE));
    // Dimensions never change
    assert_eq!((canvas.width(), canvas.height()), (8, 8));
}

#[test]
fn test_zero_length_line_is_a_round_dot() {
    let mut canvas = Canvas::new(50, 50, Color32::WHITE);
    let center = PixelPos::new(20, 20);
    canvas.draw_line(center, center, Color32::RED, 10);

    assert_eq!(canvas.get(center), Some(Color32::RED));
    // Exactly ten pixels across in both directions
    assert!(painted(&canvas, 15, 20));
    assert!(painted(&canvas, 24, 20));
    assert!(!painted(&canvas, 14, 20));
    assert!(!painted(&canvas, 25, 20));
    assert!(painted(&canvas, 20, 15));
    assert!(painted(&canvas, 20, 24));
    assert!(!painted(&canvas, 20, 14));
    assert!(!painted(&canvas, 20, 25));
    // Round, not square
    assert!(painted(&canvas, 23, 23));
    assert!(!painted(&canvas, 24, 24));
    assert!(!painted(&canvas, 15, 15));
}

#[test]
fn test_width_one_dot_paints_the_pixel() {
    let mut canvas = Canvas::new(5, 5, Color32::WHITE);
    canvas.draw_line(PixelPos::new(2, 2), PixelPos::new(2, 2), Color32::BLACK, 1);
    let count = canvas.pixels().iter().filter(|&&p| p == Color32::BLACK).count();
    assert_eq!(count, 1);
    assert_eq!(canvas.get(PixelPos::new(2, 2)), Some(Color32::BLACK));
}

#[test]
fn test_horizontal_line_has_stroke_width() {
    let mut canvas = Canvas::new(200, 50, Color32::WHITE);
    canvas.draw_line(PixelPos::new(0, 20), PixelPos::new(100, 20), Color32::RED, 10);

    assert_eq!(canvas.get(PixelPos::new(50, 20)), Some(Color32::RED));
    assert_eq!(canvas.get(PixelPos::new(50, 15)), Some(Color32::RED));
    assert_eq!(canvas.get(PixelPos::new(50, 24)), Some(Color32::RED));
    assert_eq!(canvas.get(PixelPos::new(50, 14)), Some(Color32::WHITE));
    assert_eq!(canvas.get(PixelPos::new(50, 25)), Some(Color32::WHITE));
    // Round cap past the end
    assert_eq!(canvas.get(PixelPos::new(104, 20)), Some(Color32::RED));
    assert_eq!(canvas.get(PixelPos::new(105, 20)), Some(Color32::WHITE));
}

fn column_thickness(canvas: &Canvas, x: i32) -> usize {
    (0..canvas.height() as i32).filter(|&y| painted(canvas, x, y)).count()
}

fn row_thickness(canvas: &Canvas, y: i32) -> usize {
    (0..canvas.width() as i32).filter(|&x| painted(canvas, x, y)).count()
}

#[test]
fn test_line_thickness_matches_width() {
    for width in 1..=12 {
        let mut canvas = Canvas::new(120, 60, Color32::WHITE);
        canvas.draw_line(PixelPos::new(20, 30), PixelPos::new(90, 30), Color32::BLACK, width);
        assert_eq!(column_thickness(&canvas, 50), width as usize, "width {width}");

        let mut canvas = Canvas::new(60, 120, Color32::WHITE);
        canvas.draw_line(PixelPos::new(30, 20), PixelPos::new(30, 90), Color32::BLACK, width);
        assert_eq!(row_thickness(&canvas, 50), width as usize, "width {width}");
    }
}

#[test]
fn test_dot_diameter_matches_width() {
    for width in [1, 2, 3, 4, 5, 10] {
        let mut canvas = Canvas::new(40, 40, Color32::WHITE);
        let center = PixelPos::new(20, 20);
        canvas.draw_line(center, center, Color32::BLACK, width);
        assert!(painted(&canvas, 20, 20), "width {width}");
        assert_eq!(row_thickness(&canvas, 20), width as usize, "width {width}");
        assert_eq!(column_thickness(&canvas, 20), width as usize, "width {width}");
    }
}

#[test]
fn test_consecutive_segments_leave_no_gap() {
    let mut canvas = Canvas::new(40, 40, Color32::WHITE);
    let points = [(5, 5), (15, 8), (18, 20), (6, 30)];
    for pair in points.windows(2) {
        canvas.draw_line(pair[0].into(), pair[1].into(), Color32::BLACK, 3);
    }
    for &(x, y) in &points {
        assert!(painted(&canvas, x, y));
    }
    // Outer side of the corner at (15, 8) is covered by the round join
    assert!(painted(&canvas, 16, 7));
}

#[test]
fn test_out_of_bounds_is_clipped() {
    let mut canvas = Canvas::new(20, 20, Color32::WHITE);
    canvas.draw_line(PixelPos::new(-50, -50), PixelPos::new(500, 500), Color32::GREEN, 4);
    assert_eq!(canvas.get(PixelPos::new(10, 10)), Some(Color32::GREEN));
    assert_eq!(canvas.get(PixelPos::new(0, 19)), Some(Color32::WHITE));

    let before = canvas.snapshot();
    canvas.draw_line(PixelPos::new(-100, -100), PixelPos::new(-50, -40), Color32::RED, 6);
    canvas.draw_line(
        PixelPos::new(i32::MIN, 0),
        PixelPos::new(i32::MIN, 5),
        Color32::RED,
        u32::MAX,
    );
    assert_eq!(canvas.snapshot(), before);
}

#[test]
fn test_snapshot_is_independent_and_restores() {
    let mut canvas = Canvas::new(16, 16, Color32::WHITE);
    let blank = canvas.snapshot();

    canvas.draw_line(PixelPos::new(0, 0), PixelPos::new(15, 15), Color32::BLACK, 2);
    assert_ne!(canvas.snapshot(), blank);
    assert!(blank.pixels().iter().all(|&p| p == Color32::WHITE));
    assert_eq!((blank.width(), blank.height()), (16, 16));

    canvas.restore(&blank);
    assert_eq!(canvas.snapshot(), blank);
}

#[test]
fn test_restore_ignores_foreign_snapshot() {
    let other = Canvas::new(4, 4, Color32::BLACK).snapshot();
    let mut canvas = Canvas::new(8, 8, Color32::WHITE);
    canvas.restore(&other);
    assert!(canvas.pixels().iter().all(|&p| p == Color32::WHITE));
}
