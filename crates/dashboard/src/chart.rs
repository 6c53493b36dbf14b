//! Chart Surface and Instance Lifecycle

use alert_aggregate::HourlySeries;
use serde::Serialize;
use tracing::debug;

const LINE_COLOR: &str = "rgba(59,130,246,1)";
const GRADIENT_TOP: &str = "rgba(59,130,246,0.5)";
const GRADIENT_BOTTOM: &str = "rgba(59,130,246,0)";

/// Vertical fill gradient, sized to the surface at instance creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradient {
    /// Gradient extent in pixels (the surface height when created)
    pub height_px: u32,
    pub top_color: String,
    pub bottom_color: String,
}

/// One live chart bound to a surface.
///
/// Serializes to the config document a drawing surface consumes: a
/// filled line series over categorical hour labels, zero-based Y axis,
/// no legend, smoothed line without point markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartInstance {
    pub kind: &'static str,
    pub labels: Vec<String>,
    pub series_label: &'static str,
    pub data: Vec<u64>,
    pub fill: bool,
    pub gradient: Gradient,
    pub border_color: &'static str,
    /// Line smoothing factor
    pub tension: f32,
    pub point_radius: u32,
    pub legend: bool,
    pub y_begin_at_zero: bool,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
}

impl ChartInstance {
    fn new(series: &HourlySeries, surface_height_px: u32) -> Self {
        Self {
            kind: "line",
            labels: series.labels.clone(),
            series_label: "Alerts per Hour",
            data: series.data.clone(),
            fill: true,
            gradient: Gradient {
                height_px: surface_height_px,
                top_color: GRADIENT_TOP.to_string(),
                bottom_color: GRADIENT_BOTTOM.to_string(),
            },
            border_color: LINE_COLOR,
            tension: 0.35,
            point_radius: 0,
            legend: false,
            y_begin_at_zero: true,
            x_axis_title: "Time",
            y_axis_title: "Count",
        }
    }
}

/// Owns the single chart instance bound to one canvas-like surface.
///
/// Single-writer lifecycle: rendering destroys any prior instance
/// before creating its replacement, so at most one instance is ever
/// live and a stale handle can never shadow a fresh one.
#[derive(Debug, Default)]
pub struct ChartSurface {
    height_px: u32,
    active: Option<ChartInstance>,
}

impl ChartSurface {
    /// Create a surface with the given rendered height
    pub fn new(height_px: u32) -> Self {
        Self {
            height_px,
            active: None,
        }
    }

    /// Destroy the previous instance, then create one from the series.
    ///
    /// An empty series still produces an instance: the chart draws with
    /// no points rather than erroring.
    pub fn render(&mut self, series: &HourlySeries) -> &ChartInstance {
        if self.active.take().is_some() {
            debug!("Destroyed previous chart instance");
        }

        let instance = ChartInstance::new(series, self.height_px);
        debug!("Created chart instance with {} hour buckets", instance.labels.len());
        self.active.insert(instance)
    }

    /// The currently live instance, if a render pass has run
    pub fn active(&self) -> Option<&ChartInstance> {
        self.active.as_ref()
    }

    /// Release the live instance without creating a replacement
    pub fn teardown(&mut self) {
        if self.active.take().is_some() {
            debug!("Chart surface torn down");
        }
    }
}
