use crate::math::bounds::Range;

/// Maps data coordinates onto a target rectangle whose y axis points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: Range,
    pub y: Range,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(x: Range, y: Range, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            left,
            top,
            width,
            height,
        }
    }

    pub fn map_x(&self, x: f64) -> f64 {
        self.left + normalize(x, self.x) * self.width
    }

    pub fn map_y(&self, y: f64) -> f64 {
        self.top + self.height - normalize(y, self.y) * self.height
    }

    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (self.map_x(x), self.map_y(y))
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

fn normalize(value: f64, range: Range) -> f64 {
    let span = range.span();
    if span > 0.0 {
        (value - range.min) / span
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_rectangle_edges() {
        let viewport = Viewport::new(
            Range::new(0.0, 10.0),
            Range::new(0.0, 5.0),
            100.0,
            50.0,
            800.0,
            600.0,
        );
        assert_eq!(viewport.map(0.0, 0.0), (100.0, 650.0));
        assert_eq!(viewport.map(10.0, 5.0), (900.0, 50.0));
        assert_eq!(viewport.map(5.0, 2.5), (500.0, 350.0));
    }
}
