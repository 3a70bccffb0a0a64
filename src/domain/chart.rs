// Chart configuration models
//
// Typed equivalents of the configuration objects handed to the charting
// frontend: a gradient-filled line/area chart and a health-gauge doughnut
// with a centered numeric overlay.

use serde::{Serialize, Serializer};

use crate::domain::health::HealthBand;
use crate::error::{DashboardError, Result};

/// Stroke and point-border color applied to every line series.
pub const SERIES_STROKE: &str = "#8979FF";
/// Ring remainder color behind the gauge value segment.
pub const GAUGE_REMAINDER_COLOR: &str = "#212A42";

const LEGEND_LABEL_COLOR: Rgba = Rgba::new(0, 178, 255, 0.95);
const TICK_COLOR: Rgba = Rgba::new(0, 178, 255, 0.95);
const GRID_COLOR: Rgba = Rgba::new(0, 0, 26, 0.15);

/// An RGBA color. Serializes as its CSS string form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `rgba(r, g, b, a)`, `rgb(r, g, b)` or `#rrggbb` notation.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(DashboardError::InvalidColor(input.to_string()));
            }
            let component = |range| {
                u8::from_str_radix(&hex[range], 16)
                    .map_err(|_| DashboardError::InvalidColor(input.to_string()))
            };
            return Ok(Self::new(component(0..2)?, component(2..4)?, component(4..6)?, 1.0));
        }

        let inner = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| DashboardError::InvalidColor(input.to_string()))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(DashboardError::InvalidColor(input.to_string()));
        }

        let channel = |value: &str| {
            value
                .parse::<u8>()
                .map_err(|_| DashboardError::InvalidColor(input.to_string()))
        };
        let alpha = match parts.get(3) {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|a| (0.0..=1.0).contains(a))
                .ok_or_else(|| DashboardError::InvalidColor(input.to_string()))?,
            None => 1.0,
        };

        Ok(Self::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha))
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// One stop of a top-to-bottom linear gradient fill.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Derive the area fill from a series base color: the declared RGB with
/// alpha scaled to 0.8 at the top and 0.1 at the bottom.
pub fn gradient_stops(base: Rgba) -> [GradientStop; 2] {
    [
        GradientStop { offset: 0.0, color: base.with_alpha(base.a * 0.8) },
        GradientStop { offset: 1.0, color: base.with_alpha(base.a * 0.1) },
    ]
}

/// Caller-side description of one series to plot.
#[derive(Debug, Clone)]
pub struct SeriesInput {
    pub label: String,
    pub values: Vec<f64>,
    pub base_color: String,
}

impl SeriesInput {
    pub fn new(label: impl Into<String>, values: Vec<f64>, base_color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values,
            base_color: base_color.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub fill: [GradientStop; 2],
    pub border_color: Rgba,
    pub point_border_color: Rgba,
    pub point_background_color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub duration_ms: u32,
    pub easing: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub position: &'static str,
    pub label_color: Rgba,
}

#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    pub dash: [u32; 2],
    pub color: Rgba,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub tension: f64,
    pub border_width: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    pub radius: u32,
    pub hover_radius: u32,
    pub border_width: u32,
}

/// Full configuration of the gradient-filled line/area chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartSpec {
    pub labels: Vec<String>,
    pub series: Vec<LineSeries>,
    pub aspect_ratio: f64,
    pub animation: Animation,
    pub legend: Legend,
    pub grid: Grid,
    pub tick_color: Rgba,
    pub line: LineStyle,
    pub point: PointStyle,
}

impl LineChartSpec {
    /// Validate the inputs and derive the per-series gradient fill and the
    /// fixed stroke/point palette.
    pub fn build(labels: Vec<String>, inputs: Vec<SeriesInput>) -> Result<Self> {
        if inputs.is_empty() {
            return Err(DashboardError::invalid_input("line chart needs at least one series"));
        }

        let stroke = Rgba::parse(SERIES_STROKE)?;
        let mut series = Vec::with_capacity(inputs.len());
        for input in inputs {
            if input.values.len() != labels.len() {
                return Err(DashboardError::invalid_input(format!(
                    "series '{}' has {} values for {} labels",
                    input.label,
                    input.values.len(),
                    labels.len()
                )));
            }
            let base = Rgba::parse(&input.base_color)?;
            series.push(LineSeries {
                label: input.label,
                values: input.values,
                fill: gradient_stops(base),
                border_color: stroke,
                point_border_color: stroke,
                point_background_color: "white",
            });
        }

        Ok(Self {
            labels,
            series,
            aspect_ratio: 1.5,
            animation: Animation { duration_ms: 500, easing: "easeInOutQuad" },
            legend: Legend { position: "bottom", label_color: LEGEND_LABEL_COLOR },
            grid: Grid { dash: [5, 5], color: GRID_COLOR },
            tick_color: TICK_COLOR,
            line: LineStyle { tension: 0.4, border_width: 1 },
            point: PointStyle { radius: 3, hover_radius: 7, border_width: 2 },
        })
    }
}

/// Numeric overlay painted in the middle of the gauge ring.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterText {
    pub text: String,
    pub color: &'static str,
    pub font_size: f64,
    pub font_family: &'static str,
    pub font_weight: &'static str,
}

/// Full configuration of the two-segment health gauge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeSpec {
    pub value: f64,
    pub segments: [f64; 2],
    pub segment_colors: [&'static str; 2],
    pub border_width: u32,
    pub cutout_percent: f64,
    pub rotation: f64,
    pub circumference: f64,
    pub animate_rotate: bool,
    pub animate_scale: bool,
    pub legend_display: bool,
    pub tooltip_enabled: bool,
    pub center_text: CenterText,
}

impl GaugeSpec {
    /// Build the gauge for a 0-100 health index on a surface of the given
    /// pixel width. The overlay font scales with the surface, floored at
    /// 10px.
    pub fn build(health: f64, surface_width: u32) -> Result<Self> {
        if !health.is_finite() || !(0.0..=100.0).contains(&health) {
            return Err(DashboardError::invalid_input(format!(
                "health index {health} outside 0-100"
            )));
        }

        let band = HealthBand::from_index(health);
        let font_size = (f64::from(surface_width) * 0.1).max(10.0);

        Ok(Self {
            value: health,
            segments: [health, 100.0 - health],
            segment_colors: [band.color(), GAUGE_REMAINDER_COLOR],
            border_width: 0,
            cutout_percent: 60.0,
            rotation: 0.0,
            circumference: 360.0,
            animate_rotate: true,
            animate_scale: true,
            legend_display: false,
            tooltip_enabled: false,
            center_text: CenterText {
                text: format_value(health),
                color: band.color(),
                font_size,
                font_family: "Arial",
                font_weight: "bold",
            },
        })
    }

    pub fn band(&self) -> HealthBand {
        HealthBand::from_index(self.value)
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
