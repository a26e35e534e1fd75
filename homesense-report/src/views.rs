// Homesense Report - Views
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! The three report views, as serializable values.

use homesense::{
    ChartSeries, DataSummary, Insights, PreparationSummary, Processor, RawRecord, Result,
};
use serde::Serialize;

/// Rows of raw data shown in the exploration view.
pub const SAMPLE_ROWS: usize = 100;

/// Raw data as generated: summary plus the first rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationView {
    pub summary: DataSummary,
    pub sample: Vec<RawRecord>,
}

/// Result of cleaning: counters and a summary of the cleaned set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationView {
    pub preparation: PreparationSummary,
    pub summary: DataSummary,
}

/// Dashboard: counters, insights and chart series.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub preparation: PreparationSummary,
    pub insights: Insights,
    pub charts: ChartSeries,
}

pub fn exploration(processor: &Processor, raw: &[RawRecord]) -> ExplorationView {
    ExplorationView {
        summary: processor.summarize(raw),
        sample: raw.iter().take(SAMPLE_ROWS).cloned().collect(),
    }
}

pub fn preparation(processor: &Processor, raw: &[RawRecord]) -> PreparationView {
    let prepared = processor.prepare(raw);
    PreparationView {
        summary: processor.summarize(&prepared.cleaned),
        preparation: prepared.summary,
    }
}

pub fn dashboard(processor: &Processor, raw: &[RawRecord]) -> Result<DashboardView> {
    let prepared = processor.prepare(raw);
    Ok(DashboardView {
        insights: processor.insights(&prepared.cleaned)?,
        charts: processor.chart_series(&prepared.cleaned)?,
        preparation: prepared.summary,
    })
}
