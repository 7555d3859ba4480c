//! Draw the color gradient across the full width of the terminal.

use paprika::{ColorBox, Console, Options};

fn main() -> paprika::Result<()> {
    let console = Console::new(Options::default());
    console.print(&ColorBox)
}
