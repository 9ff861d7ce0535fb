// MIT/Apache2 License

use approx::assert_abs_diff_eq;
use canvas_shapes::{Command, Defaults, HexColor, RecordingSurface, ShapeRenderer};

type Draw = fn(&mut ShapeRenderer<RecordingSurface>) -> canvas_shapes::Result;

fn renderer(defaults: Option<Defaults>) -> ShapeRenderer<RecordingSurface> {
    let _ = env_logger::builder().is_test(true).try_init();
    ShapeRenderer::new(RecordingSurface::default(), defaults).unwrap()
}

fn points(commands: &[Command]) -> Vec<(f64, f64)> {
    commands
        .iter()
        .filter_map(|c| match *c {
            Command::MoveTo(x, y) | Command::LineTo(x, y) => Some((x, y)),
            _ => None,
        })
        .collect()
}

#[test]
fn colors_always_start_with_hash() {
    let mut shapes = renderer(None);

    for raw in &["", "f00", "#f00", "##", "abcdef12", "not a color"] {
        shapes.set_line_color(*raw).unwrap();
        let first = shapes.line_color().clone();
        assert!(first.starts_with('#'));

        shapes.set_line_color(first.clone()).unwrap();
        assert_eq!(shapes.line_color(), &first);

        shapes.set_fill_color(*raw).unwrap();
        assert!(shapes.fill_color().starts_with('#'));
    }
}

#[test]
fn surface_follows_every_setter() {
    let mut shapes = renderer(None);

    for (width, line, fill) in &[(2.0, "#101010", "eee"), (7.5, "0f0", "#00f"), (1.0, "#000", "#fff")] {
        shapes.set_line_width(*width).unwrap();
        assert_eq!(shapes.surface().line_width(), shapes.line_width());

        shapes.set_line_color(*line).unwrap();
        assert_eq!(shapes.surface().stroke_style(), shapes.line_color());

        shapes.set_fill_color(*fill).unwrap();
        assert_eq!(shapes.surface().fill_style(), shapes.fill_color());
    }
}

#[test]
fn square_is_rectangle() {
    for &(side, left, top) in &[(0.0, 0.0, 0.0), (10.0, 20.0, 30.0), (-4.0, 1.5, -2.5)] {
        let mut squares = renderer(None);
        squares.square(side, left, top).unwrap();

        let mut rectangles = renderer(None);
        rectangles.rectangle(side, side, left, top).unwrap();

        assert_eq!(squares.surface().commands(), rectangles.surface().commands());
    }
}

#[test]
fn stroke_follows_fill_only_with_positive_width() {
    for &width in &[0.0, 0.5, 3.0] {
        let mut shapes = renderer(Some(Defaults::default().with_line_width(width)));

        let draws: [Draw; 5] = [
            |s| s.rectangle(10.0, 5.0, 0.0, 0.0),
            |s| s.square(10.0, 0.0, 0.0),
            |s| s.circle(10.0, 20.0, 20.0),
            |s| s.right_angle_triangle(10, 5, 100, 100, false),
            |s| s.equilateral_triangle(10.0, 50.0, 50.0),
        ];

        for draw in draws.iter() {
            shapes.surface_mut().take_commands();
            draw(&mut shapes).unwrap();

            let paints: Vec<Command> = shapes
                .surface()
                .commands()
                .iter()
                .filter(|c| c.is_paint())
                .cloned()
                .collect();

            if width > 0.0 {
                assert_eq!(paints, vec![Command::Fill, Command::Stroke]);
            } else {
                assert_eq!(paints, vec![Command::Fill]);
            }
        }
    }
}

#[test]
fn right_angle_triangle_direction() {
    let mut shapes = renderer(None);
    shapes.right_angle_triangle(10, 5, 100, 100, false).unwrap();
    assert_eq!(
        points(&shapes.surface_mut().take_commands()),
        vec![(100.0, 100.0), (110.0, 100.0), (100.0, 95.0), (100.0, 100.0)]
    );

    shapes.right_angle_triangle(10, 5, 100, 100, true).unwrap();
    assert_eq!(
        points(&shapes.surface_mut().take_commands()),
        vec![(100.0, 100.0), (90.0, 100.0), (100.0, 95.0), (100.0, 100.0)]
    );

    shapes
        .right_angle_triangle("10", "5", "100", "100", true)
        .unwrap();
    assert_eq!(
        points(&shapes.surface_mut().take_commands()),
        vec![(100.0, 100.0), (90.0, 100.0), (100.0, 95.0), (100.0, 100.0)]
    );
}

#[test]
fn equilateral_triangle_geometry() {
    let mut shapes = renderer(None);
    shapes.equilateral_triangle(10.0, 50.0, 50.0).unwrap();

    let pts = points(shapes.surface().commands());
    assert_eq!(pts.len(), 4);
    assert_eq!(pts[0], (50.0, 50.0));
    assert_eq!(pts[1].0, 55.0);
    assert_eq!(pts[2].0, 45.0);
    assert_abs_diff_eq!(pts[1].1, 58.660, epsilon = 1e-3);
    assert_abs_diff_eq!(pts[2].1, 58.660, epsilon = 1e-3);
    assert_eq!(pts[3], (50.0, 50.0));
}

#[test]
fn default_initialization() {
    let shapes = renderer(None);
    assert_eq!(shapes.line_width(), 1.0);
    assert_eq!(shapes.line_color(), "#000");
    assert_eq!(shapes.fill_color(), "#fff");
}

#[test]
fn partial_defaults_fall_back_per_field() {
    let shapes = renderer(Some(Defaults::default().with_line_color("f00")));
    assert_eq!(shapes.line_width(), 1.0);
    assert_eq!(shapes.line_color(), "#f00");
    assert_eq!(shapes.fill_color(), "#fff");

    let shapes = renderer(Some(Defaults {
        line_width: Some(0.0),
        line_color: None,
        fill_color: Some("#abc".into()),
    }));
    assert_eq!(shapes.line_width(), 0.0);
    assert_eq!(shapes.line_color(), "#000");
    assert_eq!(shapes.fill_color(), "#abc");
}

#[test]
fn clear_leaves_style_alone() {
    let mut shapes = renderer(None);
    shapes.set_lines_and_fill(2.0, "#00f", "ff0").unwrap();
    shapes.circle(30.0, 60.0, 60.0).unwrap();

    let before = (
        shapes.line_width(),
        shapes.line_color().clone(),
        shapes.fill_color().clone(),
    );
    shapes.clear().unwrap();
    let after = (
        shapes.line_width(),
        shapes.line_color().clone(),
        shapes.fill_color().clone(),
    );

    assert_eq!(before, after);
    assert!(shapes.surface().is_blank());
    assert_eq!(shapes.surface().fill_style(), &HexColor::new("#ff0"));
}
