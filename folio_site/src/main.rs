// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the portfolio charts into a standalone HTML report.

mod charts;
mod data;
mod html;
mod svg;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use folio_geom::{
    BarSpec, LineSpec, RadarSpec, Selection, SinglePlacement, StackedSpec, Surface, TimelineSpec,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::html::HtmlSection;

const RADAR_SIZE: f64 = 320.0;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Render the portfolio charts to HTML")]
struct Cli {
    /// Where to write the report.
    #[arg(long, default_value = "folio_charts.html")]
    out: PathBuf,
    /// Stacked series to emphasize; also picks the explanation paragraph.
    #[arg(long, value_enum, default_value_t = Focus::Completion)]
    focus: Focus,
    /// Index of the uplift point to highlight.
    #[arg(long)]
    highlight: Option<usize>,
    /// Where a lone timeline event sits.
    #[arg(long, value_enum, default_value_t = Placement::Start)]
    timeline_single: Placement,
    /// Tracing filter (overrides `RUST_LOG`).
    #[arg(long)]
    log: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Completion,
    Explainer,
    ColdStart,
}

impl Focus {
    fn series_name(self) -> &'static str {
        match self {
            Self::Completion => "Completion",
            Self::Explainer => "Explainer",
            Self::ColdStart => "ColdStart",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Start,
    Center,
}

impl From<Placement> for SinglePlacement {
    fn from(value: Placement) -> Self {
        match value {
            Placement::Start => Self::Start,
            Placement::Center => Self::Center,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let sections = vec![
        uplift_section(cli.highlight)?,
        explainer_section(cli.focus)?,
        skills_section()?,
        timeline_section(cli.timeline_single.into())?,
        reach_section()?,
    ];
    let html = html::render_report("Folio charts", &sections);
    std::fs::write(&cli.out, html)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    tracing::info!(path = %cli.out.display(), sections = sections.len(), "wrote report");
    Ok(())
}

fn init_tracing(filter: Option<&str>) {
    let (env_filter, rejected) = resolve_filter(filter);
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("folio: could not install the log subscriber: {err}");
    }
    if let Some(err) = rejected {
        tracing::warn!(
            filter = filter.unwrap_or_default(),
            %err,
            "ignoring invalid --log filter"
        );
    }
}

/// Picks `--log`, then `RUST_LOG`, then `info`. Returns the parse error of a rejected `--log`.
fn resolve_filter(filter: Option<&str>) -> (EnvFilter, Option<ParseError>) {
    let fallback =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match filter.map(EnvFilter::try_new) {
        Some(Ok(f)) => (f, None),
        Some(Err(err)) => (fallback(), Some(err)),
        None => (fallback(), None),
    }
}

fn uplift_section(highlight: Option<usize>) -> Result<HtmlSection> {
    let surface = Surface::line_chart_default();
    let line = LineSpec::new(surface)
        .map(&data::uplift())
        .context("mapping uplift line")?;
    let highlight = Selection::from(highlight).within(line.points.len());
    Ok(HtmlSection {
        title: "Watch-time uplift",
        description: "Relative uplift in the weeks leading up to launch.".into(),
        svg: charts::line_chart(&surface, &line, data::NETFLIX_RED, data::EMBER, highlight),
    })
}

fn explainer_section(focus: Focus) -> Result<HtmlSection> {
    let surface = Surface::stacked_chart_default();
    let order = data::explainer_series();
    let stacked = StackedSpec::new(surface)
        .map(&data::explainer_rows(), &order)
        .context("mapping explainer impact")?;
    let name = focus.series_name();
    let selected = Selection::from(order.position(name));
    tracing::debug!(series = name, version = order.version, "focused series");
    Ok(HtmlSection {
        title: "Explainer impact",
        description: format!(
            "{}: {}",
            data::series_caption(name),
            data::series_explanation(name)
        ),
        svg: charts::stacked_chart(&surface, &stacked, &order, selected),
    })
}

fn skills_section() -> Result<HtmlSection> {
    let radar = RadarSpec::for_size(RADAR_SIZE)
        .map(&data::skills())
        .context("mapping skill radar")?;
    Ok(HtmlSection {
        title: "Skills",
        description: "Self-assessed levels out of 100.".into(),
        svg: charts::radar_chart(RADAR_SIZE, &radar, data::NETFLIX_RED, Selection::None),
    })
}

fn timeline_section(single: SinglePlacement) -> Result<HtmlSection> {
    let surface = Surface::new(320.0, 120.0, 24.0);
    let timeline = TimelineSpec::from_surface(&surface)
        .with_single_placement(single)
        .map(&data::work_events())
        .context("mapping work timeline")?;
    let details: Vec<&str> = data::WORK_STREAMS.iter().map(|w| w.meta).collect();
    Ok(HtmlSection {
        title: "Work streams",
        description: String::new(),
        svg: charts::timeline_chart(&surface, &timeline, &details, data::EMBER),
    })
}

fn reach_section() -> Result<HtmlSection> {
    let surface = Surface::new(320.0, 160.0, 26.0);
    let bars = BarSpec::new(surface)
        .map(&data::project_reach())
        .context("mapping project reach")?;
    Ok(HtmlSection {
        title: "Project reach",
        description: "Records analyzed per project, in thousands.".into(),
        svg: charts::bar_chart(&surface, &bars, data::EMBER, "K"),
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert_eq!(cli.out, PathBuf::from("folio_charts.html"));
        assert_eq!(cli.focus, Focus::Completion);
        assert_eq!(cli.timeline_single, Placement::Start);
        assert!(cli.highlight.is_none());
    }

    #[test]
    fn cli_parses_kebab_case_values() {
        let cli = Cli::try_parse_from([
            "folio",
            "--focus",
            "cold-start",
            "--timeline-single",
            "center",
            "--highlight",
            "4",
        ])
        .unwrap();
        assert_eq!(cli.focus, Focus::ColdStart);
        assert_eq!(cli.timeline_single, Placement::Center);
        assert_eq!(cli.highlight, Some(4));
    }

    #[test]
    fn invalid_log_filter_is_reported() {
        let (_, rejected) = resolve_filter(Some("folio=loudest"));
        assert!(rejected.is_some());
        let (filter, rejected) = resolve_filter(Some("folio_geom=trace"));
        assert!(rejected.is_none());
        assert!(filter.to_string().contains("folio_geom=trace"));
    }

    #[test]
    fn every_section_maps() {
        assert!(uplift_section(Some(99)).is_ok());
        for focus in [Focus::Completion, Focus::Explainer, Focus::ColdStart] {
            let section = explainer_section(focus).unwrap();
            assert!(section.description.starts_with(data::series_caption(focus.series_name())));
        }
        assert!(skills_section().is_ok());
        assert!(timeline_section(SinglePlacement::Center).is_ok());
        assert!(reach_section().is_ok());
    }
}
