/// Colours handed out to clones in order
pub const PALETTE: [&str; 8] = [
    "#e6194B", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6",
];

pub const STROKE_WEIGHT: f64 = 2.0;
pub const FILL_OPACITY: f64 = 0.5;

/// Rendering hints attached to a clone
#[derive(Debug, Clone, PartialEq)]
pub struct CloneStyle {
    pub color: String,
    pub weight: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl CloneStyle {
    pub fn solid(color: &str) -> Self {
        Self {
            color: color.to_string(),
            weight: STROKE_WEIGHT,
            fill_color: color.to_string(),
            fill_opacity: FILL_OPACITY,
        }
    }
}

/// Cycles through [`PALETTE`], wrapping after the last colour
#[derive(Debug, Clone, Default)]
pub struct Palette {
    next: usize,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_style(&mut self) -> CloneStyle {
        let style = CloneStyle::solid(PALETTE[self.next % PALETTE.len()]);
        self.next = self.next.wrapping_add(1);
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        let mut palette = Palette::new();
        let colors: Vec<String> = (0..10).map(|_| palette.next_style().color).collect();

        assert_eq!(colors[0], "#e6194B");
        assert_eq!(colors[7], "#f032e6");
        assert_eq!(colors[8], colors[0]);
        assert_eq!(colors[9], colors[1]);
    }

    #[test]
    fn test_style_defaults() {
        let mut palette = Palette::new();
        let style = (0..4).map(|_| palette.next_style()).last().unwrap();
        assert_eq!(style.color, "#4363d8");
        assert_eq!(style.fill_color, style.color);
        assert_eq!(style.weight, 2.0);
        assert_eq!(style.fill_opacity, 0.5);
    }
}
