//! Colors and SVG geometry for the analytics and home charts.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::aggregate::GroupCount;

/// Categorical slice colors; index wraps around.
pub const PALETTE: [&str; 5] = ["#FF5733", "#33FF57", "#3357FF", "#FFC300", "#FF33A6"];
pub const LINE_COLOR: &str = "#28A745";
pub const BAR_COLOR: &str = "#FF6F61";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Evenly spaced hue for slice `index` of `total`.
pub fn hue_color(index: usize, total: usize) -> String {
    let hue = if total == 0 {
        0.0
    } else {
        (index as f64 * 360.0) / total as f64
    };
    format!("hsl({}, 70%, 50%)", hue)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub key: String,
    pub count: usize,
    /// Radians, clockwise from 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG path for this slice on a circle of radius `r` centered at `(cx, cy)`.
    pub fn path(&self, cx: f64, cy: f64, r: f64) -> String {
        if self.sweep() >= TAU - 1e-9 {
            // A single arc cannot close on itself; draw two half circles.
            return format!(
                "M {cx:.3} {top:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {bottom:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {top:.3} Z",
                top = cy - r,
                bottom = cy + r,
            );
        }

        let (x0, y0) = polar(cx, cy, r, self.start_angle);
        let (x1, y1) = polar(cx, cy, r, self.end_angle);
        let large_arc = if self.sweep() > PI { 1 } else { 0 };
        format!(
            "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
        )
    }

    /// Anchor for a slice label, `offset` times the radius out from the center.
    pub fn label_point(&self, cx: f64, cy: f64, r: f64, offset: f64) -> (f64, f64) {
        polar(cx, cy, r * offset, self.start_angle + self.sweep() / 2.0)
    }
}

// Angle 0 points up, increasing clockwise in screen coordinates.
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + r * theta.cos(), cy + r * theta.sin())
}

pub fn pie_slices(groups: &[GroupCount]) -> Vec<PieSlice> {
    let total: usize = groups.iter().map(|g| g.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    groups
        .iter()
        .map(|group| {
            let end = start + TAU * group.count as f64 / total as f64;
            let slice = PieSlice {
                key: group.key.clone(),
                count: group.count,
                start_angle: start,
                end_angle: end,
            };
            start = end;
            slice
        })
        .collect()
}

/// Outer size and inner margin of a cartesian chart, in SVG units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl ChartFrame {
    pub fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.margin).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.margin).max(0.0)
    }

    pub fn bottom(&self) -> f64 {
        self.margin + self.plot_height()
    }
}

fn max_count(groups: &[GroupCount]) -> usize {
    groups.iter().map(|g| g.count).max().unwrap_or(0)
}

/// Point per group: x evenly spaced, y scaled so the largest count touches
/// the top of the plot area.
pub fn line_points(groups: &[GroupCount], frame: ChartFrame) -> Vec<(f64, f64)> {
    let max = max_count(groups);
    if max == 0 {
        return Vec::new();
    }

    let n = groups.len();
    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let x = if n == 1 {
                frame.margin + frame.plot_width() / 2.0
            } else {
                frame.margin + frame.plot_width() * i as f64 / (n - 1) as f64
            };
            let y = frame.bottom() - frame.plot_height() * group.count as f64 / max as f64;
            (x, y)
        })
        .collect()
}

/// Bar length per group, relative to the longest bar spanning `span`.
pub fn bar_lengths(groups: &[GroupCount], span: f64) -> Vec<f64> {
    let max = max_count(groups);
    if max == 0 {
        return Vec::new();
    }

    groups
        .iter()
        .map(|group| span * group.count as f64 / max as f64)
        .collect()
}

/// Integer axis ticks from zero, at most five, the last one at or past `max`.
pub fn axis_ticks(max: usize) -> Vec<usize> {
    if max == 0 {
        return vec![0];
    }

    let step = max.div_ceil(4).max(1);
    let mut ticks = vec![0];
    let mut tick = 0;
    while tick < max {
        tick += step;
        ticks.push(tick);
    }
    ticks
}
