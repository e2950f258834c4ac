use super::Point2;

/// Straight segment between two points, used to measure how far a curved
/// path strays from the direct route.
#[derive(Copy, Clone, Debug)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn closest_point_to(&self, point: Point2) -> Point2 {
        let line_direction = self.end - self.start;
        let point_direction = point - self.start;

        let line_length_squared = line_direction.norm().powi(2);
        if line_length_squared == 0.0 {
            // zero length segment
            return self.start;
        }
        let t = (point_direction.dot(line_direction) / line_length_squared).clamp(0., 1.);

        self.start + line_direction * t
    }

    pub fn distance_to(&self, point: Point2) -> f64 {
        self.closest_point_to(point).distance_to(point)
    }

    /// positive when `point` lies to the left of `start -> end`
    pub fn side_of(&self, point: Point2) -> f64 {
        (self.end - self.start).perp_dot(point - self.start)
    }
}
