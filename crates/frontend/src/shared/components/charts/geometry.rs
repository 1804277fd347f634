//! SVG geometry helpers shared by the chart components

use std::f64::consts::PI;

pub const PALETTE: [&str; 8] = [
    "#667eea", "#764ba2", "#f6ad55", "#48bb78", "#ed64a6", "#4299e1", "#ecc94b", "#a0aec0",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Rounds an axis maximum up to 1, 2 or 5 times a power of ten
pub fn nice_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Height of a value on a `height`-tall plot scaled to `max`
pub fn scale(value: f64, max: f64, height: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max).clamp(0.0, 1.0) * height
    }
}

/// Polyline path through evenly spaced values, y growing downwards
pub fn line_path(values: &[f64], width: f64, height: f64, max: f64) -> String {
    match values.len() {
        0 => String::new(),
        1 => {
            let y = height - scale(values[0], max, height);
            format!("M 0.00,{:.2} L {:.2},{:.2}", y, width, y)
        }
        n => {
            let x_step = width / (n - 1) as f64;
            let mut path = String::new();
            for (i, value) in values.iter().enumerate() {
                let x = i as f64 * x_step;
                let y = height - scale(*value, max, height);
                if i == 0 {
                    path.push_str(&format!("M {:.2},{:.2}", x, y));
                } else {
                    path.push_str(&format!(" L {:.2},{:.2}", x, y));
                }
            }
            path
        }
    }
}

/// Start/end angles (radians, clockwise from 12 o'clock) of each slice
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|value| {
            let sweep = value.max(0.0) / total * 2.0 * PI;
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Ring segment between `inner` and `outer` radius
pub fn donut_arc(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A full-circle arc has identical endpoints and would not render
    let end = if end - start >= 2.0 * PI - 1e-6 {
        start + 2.0 * PI - 1e-4
    } else {
        end
    };
    let large_arc = if end - start > PI { 1 } else { 0 };

    let (ox1, oy1) = polar(cx, cy, outer, start);
    let (ox2, oy2) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix2, iy2) = polar(cx, cy, inner, start);

    format!(
        "M {:.2},{:.2} A {:.2},{:.2} 0 {} 1 {:.2},{:.2} L {:.2},{:.2} A {:.2},{:.2} 0 {} 0 {:.2},{:.2} Z",
        ox1, oy1, outer, outer, large_arc, ox2, oy2, ix1, iy1, inner, inner, large_arc, ix2, iy2
    )
}
