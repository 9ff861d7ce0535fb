// MIT/Apache2 License

use canvas_shapes::{Defaults, RecordingSurface, ShapeRenderer};

fn main() -> canvas_shapes::Result {
    env_logger::init();

    let defaults = Defaults::default()
        .with_line_width(4.0)
        .with_fill_color("00f");
    let mut shapes = ShapeRenderer::new(RecordingSurface::new(640, 480), Some(defaults))?;
    log::info!(
        "Drawing with version {} of the shape interface",
        ShapeRenderer::<RecordingSurface>::version()
    );

    shapes.rectangle(150.0, 100.0, 50.0, 50.0)?;
    shapes.square(60.0, 250.0, 50.0)?;

    shapes.set_fill_color("0f0")?;
    shapes.circle(50.0, 300.0, 200.0)?;

    shapes.set_lines_and_fill(0.0, "000", "#f80")?;
    shapes.right_angle_triangle(80, 60, 100, 400, false)?;
    shapes.right_angle_triangle("80", "60", "400", "400", true)?;

    shapes.set_line_width(2.0)?;
    shapes.equilateral_triangle(90.0, 520.0, 300.0)?;

    let surface = shapes.into_surface();
    for command in surface.commands() {
        println!("{:?}", command);
    }

    Ok(())
}
