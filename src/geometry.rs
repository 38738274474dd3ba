//! Planar predicates over (latitude, longitude) pairs.
//!
//! Crossing and containment are decided on raw degrees treated as planar
//! coordinates. Distances never go through here; see [`crate::traits`].

/// Twice the signed area of triangle `a, b, c`.
///
/// Positive when `c` lies to the left of the directed line `a -> b`.
pub fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn opposite_sides(s1: f64, s2: f64) -> bool {
    (s1 > 0.0 && s2 < 0.0) || (s1 < 0.0 && s2 > 0.0)
}

/// Whether segments `ab` and `cd` cross in their interiors.
///
/// Touching at an endpoint, or an endpoint resting on the other segment,
/// does not count. Collinear segments count only when they overlap along a
/// stretch of positive length.
pub fn segments_intersect(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> bool {
    let d1 = orientation(c, d, a);
    let d2 = orientation(c, d, b);
    let d3 = orientation(a, b, c);
    let d4 = orientation(a, b, d);

    if opposite_sides(d1, d2) && opposite_sides(d3, d4) {
        return true;
    }

    if d1 == 0.0 && d2 == 0.0 && d3 == 0.0 && d4 == 0.0 {
        return collinear_overlap(a, b, c, d);
    }

    false
}

/// Length of the shared stretch of two collinear segments is positive.
fn collinear_overlap(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> bool {
    // Project onto whichever axis the points spread along most.
    let span_lat = a.0.max(b.0).max(c.0).max(d.0) - a.0.min(b.0).min(c.0).min(d.0);
    let span_lon = a.1.max(b.1).max(c.1).max(d.1) - a.1.min(b.1).min(c.1).min(d.1);
    let project = |p: (f64, f64)| if span_lat >= span_lon { p.0 } else { p.1 };

    let (a, b, c, d) = (project(a), project(b), project(c), project(d));
    let low = a.min(b).max(c.min(d));
    let high = a.max(b).min(c.max(d));
    high > low
}

/// Whether `p` lies inside triangle `a, b, c` or on its boundary.
///
/// Works for either winding of the triangle.
pub fn point_in_triangle(p: (f64, f64), a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    let d1 = orientation(a, b, p);
    let d2 = orientation(b, c, p);
    let d3 = orientation(c, a, p);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}
