//! Server-rendered SVG bar charts for the visualization endpoint.
//!
//! The markup is assembled by hand: a title, a baseline, and one labelled
//! bar per data point, scaled against the largest value. Output is a
//! standalone `image/svg+xml` document.

use std::fmt::Write;
use std::str::FromStr;

use crate::error::AppError;

/// Which analytics result set a chart is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Top students of one academic level, CGPA bars.
    Level,
    /// Top students of one department, CGPA bars.
    Department,
    /// Highest mark per course.
    Courses,
    /// Mean CGPA per department.
    Performance,
}

impl FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level" => Ok(ChartKind::Level),
            "department" => Ok(ChartKind::Department),
            "courses" => Ok(ChartKind::Courses),
            "performance" => Ok(ChartKind::Performance),
            other => Err(AppError::UnknownChart(other.to_string())),
        }
    }
}

/// A single labelled bar.
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A vertical bar chart.
#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    bars: Vec<Bar>,
}

const BAR_WIDTH: u32 = 56;
const BAR_GAP: u32 = 24;
const MARGIN: u32 = 48;
const PLOT_HEIGHT: u32 = 260;
const CHART_HEIGHT: u32 = 380;
const LABEL_MAX_CHARS: usize = 14;

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bars: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.bars.push(Bar {
            label: label.into(),
            value,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Renders the chart as a standalone SVG document.
    pub fn render(&self) -> String {
        let width = MARGIN * 2 + self.bars.len() as u32 * (BAR_WIDTH + BAR_GAP);
        let width = width.max(MARGIN * 2 + BAR_WIDTH);
        let max_value = self
            .bars
            .iter()
            .map(|b| b.value)
            .fold(f64::MIN, f64::max)
            .max(f64::EPSILON);
        let baseline = MARGIN + PLOT_HEIGHT;

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = width,
            h = CHART_HEIGHT,
        );
        let _ = write!(
            svg,
            r##"<rect width="{w}" height="{h}" fill="#ffffff"/>"##,
            w = width,
            h = CHART_HEIGHT,
        );
        let _ = write!(
            svg,
            r##"<text x="{x}" y="28" text-anchor="middle" font-size="16" fill="#222">{title}</text>"##,
            x = width / 2,
            title = escape_xml(&self.title),
        );
        let _ = write!(
            svg,
            r##"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="#999" stroke-width="1"/>"##,
            x1 = MARGIN,
            x2 = width - MARGIN,
            y = baseline,
        );

        for (i, bar) in self.bars.iter().enumerate() {
            let x = MARGIN + BAR_GAP / 2 + i as u32 * (BAR_WIDTH + BAR_GAP);
            let bar_height =
                ((bar.value.max(0.0) / max_value) * PLOT_HEIGHT as f64).round() as u32;
            let y = baseline - bar_height;
            let center = x + BAR_WIDTH / 2;

            let _ = write!(
                svg,
                r##"<rect class="bar" x="{x}" y="{y}" width="{w}" height="{h}" fill="#4682b4"/>"##,
                x = x,
                y = y,
                w = BAR_WIDTH,
                h = bar_height,
            );
            let _ = write!(
                svg,
                r##"<text x="{x}" y="{y}" text-anchor="middle" font-size="11" fill="#222">{value:.2}</text>"##,
                x = center,
                y = y.saturating_sub(6).max(12),
                value = bar.value,
            );
            let _ = write!(
                svg,
                r##"<text x="{x}" y="{y}" text-anchor="middle" font-size="11" fill="#444">{label}</text>"##,
                x = center,
                y = baseline + 18,
                label = escape_xml(&truncate_label(&bar.label)),
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX_CHARS {
        label.to_string()
    } else {
        let truncated: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
        format!("{}…", truncated)
    }
}

fn escape_xml(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&apos;".to_string(),
            other => other.to_string(),
        })
        .collect()
}
