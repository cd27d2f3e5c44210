// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Literal datasets shown on the portfolio page.

use folio_geom::{DataPoint, NamedSeriesRow, SeriesDef, SeriesOrder, SkillLevel, TimelineEvent};
use peniko::Color;

pub(crate) const NETFLIX_RED: Color = Color::from_rgb8(0xe5, 0x09, 0x14);
pub(crate) const EMBER: Color = Color::from_rgb8(0xf9, 0x73, 0x16);
pub(crate) const INK: Color = Color::from_rgb8(0x02, 0x06, 0x17);
pub(crate) const MUTED: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
pub(crate) const GRID: Color = Color::from_rgb8(0x4b, 0x55, 0x63);

/// Bump when series are added, removed or reordered.
pub(crate) const EXPLAINER_SERIES_VERSION: u32 = 1;

/// Series of the explainer impact chart, bottom first.
pub(crate) fn explainer_series() -> SeriesOrder {
    SeriesOrder::new(
        EXPLAINER_SERIES_VERSION,
        [
            SeriesDef::new("Completion", Color::from_rgb8(0x22, 0xc5, 0x5e)),
            SeriesDef::new("Explainer", Color::from_rgb8(0xea, 0xb3, 0x08)),
            SeriesDef::new("ColdStart", Color::from_rgb8(0x38, 0xbd, 0xf8)),
        ],
    )
}

/// Button caption for a series.
pub(crate) fn series_caption(name: &str) -> &'static str {
    match name {
        "Completion" => "Viewing completion",
        "Explainer" => "Explanation CTR",
        "ColdStart" => "Cold-start uplift",
        _ => "Unknown series",
    }
}

/// The paragraph shown under the chart for the focused series.
pub(crate) fn series_explanation(name: &str) -> &'static str {
    match name {
        "Completion" => {
            "Explained recommendations increase completion by making intent obvious: members know why a title is a fit, so they commit."
        }
        "Explainer" => {
            "Short, human explanations drive trust and curiosity, especially for long-tail titles that don't have strong brand recognition."
        }
        "ColdStart" => {
            "Cold-start members benefit the most: explanations substitute for missing behavior, bootstrapping personalization in week one."
        }
        _ => "",
    }
}

pub(crate) fn explainer_rows() -> Vec<NamedSeriesRow> {
    [
        ("Row 1", 40.0, 28.0, 12.0),
        ("Row 2", 52.0, 33.0, 15.0),
        ("Row 3", 61.0, 40.0, 18.0),
    ]
    .into_iter()
    .map(|(label, completion, explainer, cold_start)| {
        NamedSeriesRow::new(label)
            .with("Completion", completion)
            .with("Explainer", explainer)
            .with("ColdStart", cold_start)
    })
    .collect()
}

/// Watch-time uplift leading up to launch.
pub(crate) fn uplift() -> Vec<DataPoint> {
    vec![
        DataPoint::new("T-4", 0.0, 0.0),
        DataPoint::new("T-3", 1.0, 0.06),
        DataPoint::new("T-2", 2.0, 0.12),
        DataPoint::new("T-1", 3.0, 0.20),
        DataPoint::new("Launch", 4.0, 0.32),
    ]
}

pub(crate) fn skills() -> Vec<SkillLevel> {
    vec![
        SkillLevel::new("Visualization", 90.0),
        SkillLevel::new("Front-end", 85.0),
        SkillLevel::new("Data engineering", 80.0),
        SkillLevel::new("Machine learning", 75.0),
        SkillLevel::new("Experimentation", 82.0),
        SkillLevel::new("Storytelling", 88.0),
    ]
}

/// A work stream on the experience timeline.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WorkStream {
    pub(crate) title: &'static str,
    pub(crate) meta: &'static str,
}

/// Work streams, oldest first.
pub(crate) const WORK_STREAMS: [WorkStream; 3] = [
    WorkStream {
        title: "Werner",
        meta: "Tableau, Snowflake · 50+ stakeholders",
    },
    WorkStream {
        title: "Garmin",
        meta: "Airflow, Azure, AWS, Qlik · 50K+ daily cost records",
    },
    WorkStream {
        title: "Hudl",
        meta: "React, Node.js, OpenAI · +30% workflow efficiency",
    },
];

pub(crate) fn work_events() -> Vec<TimelineEvent> {
    TimelineEvent::sequence(WORK_STREAMS.iter().map(|w| w.title))
}

/// Records analyzed per project, in thousands.
pub(crate) fn project_reach() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Beautify", 0.0, 15.0),
        DataPoint::new("Moodify", 1.0, 10.0),
        DataPoint::new("Garmin", 2.0, 50.0),
        DataPoint::new("Hudl", 3.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_has_caption_and_explanation() {
        for def in explainer_series().series() {
            assert_ne!(series_caption(&def.name), "Unknown series");
            assert!(!series_explanation(&def.name).is_empty());
        }
    }

    #[test]
    fn rows_only_use_configured_series() {
        let order = explainer_series();
        for row in explainer_rows() {
            assert!(row.values.keys().all(|k| order.position(k).is_some()));
        }
    }

    #[test]
    fn work_events_are_numbered_in_order() {
        let events = work_events();
        assert_eq!(events.len(), WORK_STREAMS.len());
        assert!(events.iter().enumerate().all(|(i, e)| e.order == i));
    }
}
