//! Printing the same renderable twice gives the same output.

use paprika::{ColorBox, Console, Constrain, Destination, Group, Options, Pad, Padding, Style, Text};
use pretty_assertions::assert_eq;

fn card() -> Group {
    Group::new()
        .with(Text::new("Colors").styled(Style::new().bold()))
        .with(Padding::new(ColorBox, Pad::symmetric(1, 2)))
        .with(Constrain::new(ColorBox, Some(10)))
        .with("And more...")
}

#[test]
fn repeated_prints_are_identical() {
    let options = Options::new()
        .destination(Destination::Capture)
        .width(Some(40))
        .color(Some(true));
    let mut console = Console::new(options);
    let card = card();

    console.print(&card).unwrap();
    let first = console.take_captured_output();
    console.set_destination(Destination::Capture);
    console.print(&card).unwrap();
    let second = console.take_captured_output();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn separate_consoles_agree() {
    let options = Options::new()
        .destination(Destination::Capture)
        .width(Some(25));
    let a = Console::new(options.clone());
    let b = Console::new(options);
    a.print(&card()).unwrap();
    b.print(&card()).unwrap();
    assert_eq!(a.take_captured_output(), b.take_captured_output());
}

#[test]
fn composite_at_ten_columns_draws_ten_cells_per_line() {
    let console = Console::new(
        Options::new()
            .destination(Destination::Capture)
            .width(Some(10)),
    );
    console.print(&Padding::new(ColorBox, Pad::default())).unwrap();
    let output = console.take_captured_output();
    assert_eq!(output.lines().count(), ColorBox::ROWS);
    for line in output.lines() {
        assert_eq!(line.chars().filter(|&c| c == '█').count(), 10);
    }
}
