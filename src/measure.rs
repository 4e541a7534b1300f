use nalgebra::Point3;

/// 3D coordinate handed over from the display layer's picking.
pub type Point = Point3<f64>;

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    (b - a).norm()
}

/// Angle at `vertex` spanned by `a` and `c`, in degrees.
///
/// Degenerate arms (either endpoint coincident with the vertex) yield 0.
pub fn angle_degrees(a: &Point, vertex: &Point, c: &Point) -> f64 {
    let v1 = a - vertex;
    let v2 = c - vertex;
    let denom = v1.norm() * v2.norm();
    if denom.abs() < f64::EPSILON {
        return 0.0;
    }

    let cos_angle = (v1.dot(&v2) / denom).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

/// A completed measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Distance between two picked points.
    Distance(f64),
    /// Angle at the middle of three picked points, in degrees.
    Angle(f64),
}

/// Point-collection state driven by the display layer.
///
/// Completing a measurement resets the mode to `Idle`; a distance and an
/// angle measurement can never be in flight at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MeasureMode {
    #[default]
    Idle,
    AwaitingDistance(Vec<Point>),
    AwaitingAngle(Vec<Point>),
}

impl MeasureMode {
    pub fn start_distance() -> Self {
        Self::AwaitingDistance(Vec::new())
    }

    pub fn start_angle() -> Self {
        Self::AwaitingAngle(Vec::new())
    }

    /// Points still needed before the current measurement completes.
    pub fn pending_points(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::AwaitingDistance(points) => 2 - points.len(),
            Self::AwaitingAngle(points) => 3 - points.len(),
        }
    }

    /// Records a picked point; returns the measurement once enough points
    /// have been collected. Points pushed while idle are ignored.
    pub fn push_point(&mut self, point: Point) -> Option<Measurement> {
        match self {
            Self::Idle => None,
            Self::AwaitingDistance(points) => {
                points.push(point);
                if points.len() < 2 {
                    return None;
                }
                let measurement = Measurement::Distance(distance(&points[0], &points[1]));
                *self = Self::Idle;
                Some(measurement)
            }
            Self::AwaitingAngle(points) => {
                points.push(point);
                if points.len() < 3 {
                    return None;
                }
                let measurement =
                    Measurement::Angle(angle_degrees(&points[0], &points[1], &points[2]));
                *self = Self::Idle;
                Some(measurement)
            }
        }
    }

    /// Abandons any partially collected points.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
