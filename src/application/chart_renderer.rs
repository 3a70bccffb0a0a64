// Chart surface registry - destroy-before-recreate lifecycle
//
// A surface (the canvas analog) owns at most one chart instance. Rendering
// onto a surface always replaces and drops whatever was attached before,
// uniformly for both renderers; `dispose` releases the instance on view
// teardown.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::chart::{GaugeSpec, LineChartSpec, SeriesInput};
use crate::error::Result;

/// A drawing surface: identity plus pixel dimensions.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSurface {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl ChartSurface {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { id: id.into(), width, height }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartSpec {
    Line(LineChartSpec),
    Gauge(GaugeSpec),
}

/// A chart attached to a surface. Dropped when replaced or disposed.
#[derive(Debug, Clone, Serialize)]
pub struct ChartInstance {
    pub generation: u64,
    pub surface: ChartSurface,
    pub spec: ChartSpec,
}

/// Handle to an installed chart, valid until the surface is re-rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    pub surface_id: String,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct ChartRegistry {
    instances: HashMap<String, ChartInstance>,
    next_generation: u64,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and install the gradient line chart.
    pub fn render_line(
        &mut self,
        surface: &ChartSurface,
        labels: Vec<String>,
        series: Vec<SeriesInput>,
    ) -> Result<ChartHandle> {
        let spec = LineChartSpec::build(labels, series)?;
        Ok(self.install(surface, ChartSpec::Line(spec)))
    }

    /// Build and install the health gauge.
    pub fn render_gauge(&mut self, surface: &ChartSurface, health: f64) -> Result<ChartHandle> {
        let spec = GaugeSpec::build(health, surface.width)?;
        Ok(self.install(surface, ChartSpec::Gauge(spec)))
    }

    /// Attach a spec to a surface, dropping any instance already there.
    pub fn install(&mut self, surface: &ChartSurface, spec: ChartSpec) -> ChartHandle {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.instances.insert(
            surface.id.clone(),
            ChartInstance { generation, surface: surface.clone(), spec },
        );
        ChartHandle { surface_id: surface.id.clone(), generation }
    }

    pub fn get(&self, surface_id: &str) -> Option<&ChartInstance> {
        self.instances.get(surface_id)
    }

    /// Release a surface's chart on view teardown. Returns whether one was
    /// attached.
    pub fn dispose(&mut self, surface_id: &str) -> bool {
        self.instances.remove(surface_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
