use approx::assert_relative_eq;
use plot_rs::core::{Axes, AxisRange, Coordinates, PixelRect, Viewport};
use plot_rs::plottables::{Plottable, RenderContext, Text};
use plot_rs::render::{Color, RenderFrame, TextHAlign, TextVAlign};
use plot_rs::style::Alignment;

fn render(text: &Text) -> RenderFrame {
    let axes = Axes::new(
        AxisRange::new(0.0, 10.0).expect("x"),
        AxisRange::new(0.0, 10.0).expect("y"),
        PixelRect::new(0.0, 100.0, 0.0, 100.0),
    );
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    let mut context = RenderContext::new(&mut frame, axes);
    text.render(&mut context).expect("render text");
    frame
}

#[test]
fn text_is_placed_at_its_location_plus_offset() {
    let mut text = Text::new(Coordinates::new(2.0, 7.0), "peak");
    text.offset_x = 3.0;
    text.offset_y = -4.0;

    let frame = render(&text);
    assert_eq!(frame.texts.len(), 1);
    assert!(frame.rects.is_empty());
    let primitive = &frame.texts[0];
    assert_eq!(primitive.text, "peak");
    assert_relative_eq!(primitive.x, 23.0);
    assert_relative_eq!(primitive.y, 26.0);
}

#[test]
fn style_flows_into_the_text_primitive() {
    let mut text = Text::new(Coordinates::new(5.0, 5.0), "label");
    let red = Color::rgb(1.0, 0.0, 0.0);
    text.set_font_color(red);
    text.set_font_size(18.0);
    text.set_font_name("Serif");
    text.set_bold(true);
    text.set_rotation(45.0);
    text.set_alignment(Alignment::LowerRight);
    text.set_line_spacing(Some(20.0));

    let frame = render(&text);
    let primitive = &frame.texts[0];
    assert_eq!(primitive.color, red);
    assert_relative_eq!(primitive.font_size_px, 18.0);
    assert_eq!(primitive.font_family, "Serif");
    assert!(primitive.bold);
    assert_relative_eq!(primitive.rotation_deg, 45.0);
    assert_eq!(primitive.h_align, TextHAlign::Right);
    assert_eq!(primitive.v_align, TextVAlign::Bottom);
    assert_eq!(primitive.line_spacing_px, Some(20.0));
}

#[test]
fn background_and_border_emit_a_rect_behind_the_text() {
    let mut text = Text::new(Coordinates::new(5.0, 5.0), "boxed");
    text.set_background_color(Color::WHITE);
    text.set_border_color(Color::BLACK);
    text.set_border_width(1.0);
    text.set_padding(2.0);

    let frame = render(&text);
    assert_eq!(frame.rects.len(), 1);
    let rect = frame.rects[0];
    assert_relative_eq!(rect.x, 48.0);
    assert_relative_eq!(rect.y, 48.0);
    assert_relative_eq!(rect.height, 12.0 + 4.0);
    assert_relative_eq!(rect.border_width, 1.0);
    assert_eq!(rect.fill_color, Color::WHITE);
}

#[test]
fn blank_or_hidden_text_renders_nothing() {
    let blank = Text::new(Coordinates::new(1.0, 1.0), "   ");
    assert!(render(&blank).is_empty());

    let mut hidden = Text::new(Coordinates::new(1.0, 1.0), "hidden");
    hidden.visible = false;
    assert!(render(&hidden).is_empty());
}

#[test]
fn limits_are_the_location_point() {
    let text = Text::new(Coordinates::new(-3.0, 8.0), "point");
    let limits = text.axis_limits();
    let x = limits.x.expect("x");
    let y = limits.y.expect("y");
    assert_eq!((x.min(), x.max()), (-3.0, -3.0));
    assert_eq!((y.min(), y.max()), (8.0, 8.0));
}
