/// Palette definition and random color selection.
use rand::RngExt;
use ratatui::style::Color;

/// The fixed palette the picker draws from, in declaration order.
pub const PALETTE: [&str; 9] = [
    "red",
    "blue",
    "green",
    "navy",
    "white",
    "black",
    "gray",
    "crimson",
    "turquoise",
];

/// Draw an index uniformly from `[0, len)`.
pub fn random_index(len: usize) -> usize {
    let mut rng = rand::rng();
    rng.random_range(0..len)
}

/// Pick one palette entry uniformly at random.
pub fn random_color() -> &'static str {
    PALETTE[random_index(PALETTE.len())]
}

/// Map a palette name to a terminal color. Names without an ANSI
/// equivalent get their CSS RGB value.
pub fn color_for(name: &str) -> Option<Color> {
    match name {
        "red" => Some(Color::Red),
        "blue" => Some(Color::Blue),
        "green" => Some(Color::Green),
        "navy" => Some(Color::Rgb(0, 0, 128)),
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        "gray" => Some(Color::Gray),
        "crimson" => Some(Color::Rgb(220, 20, 60)),
        "turquoise" => Some(Color::Rgb(64, 224, 208)),
        _ => None,
    }
}
