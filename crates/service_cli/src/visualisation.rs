//! Terminal price distribution chart.
//!
//! Bins simulated terminal prices into a [`Histogram`] and draws it with
//! ratatui's `Chart` widget into an off-screen [`Buffer`], which is then
//! printed as plain text. No terminal backend is involved, so the output can
//! be piped or captured like any other stdout text.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};
use thiserror::Error;

/// Chart title.
pub const DEFAULT_TITLE: &str = "Stock Price Distribution at Maturity";

/// Histogram and chart errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualisationError {
    /// No samples to bin
    #[error("cannot build a histogram from an empty sample set")]
    EmptySamples,
    /// Zero bins requested
    #[error("histogram needs at least one bin")]
    ZeroBins,
    /// NaN or infinite sample
    #[error("sample {index} is not finite")]
    NonFiniteSample {
        /// Position of the offending sample
        index: usize,
    },
}

/// Equal-width histogram over the sample range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    lower: f64,
    upper: f64,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bins `samples` into `bins` equal-width bins spanning [min, max].
    ///
    /// The maximum falls into the last bin. A degenerate range (all samples
    /// equal) is widened by ±0.5 so the bins keep a positive width.
    pub fn from_samples(samples: &[f64], bins: usize) -> Result<Self, VisualisationError> {
        if samples.is_empty() {
            return Err(VisualisationError::EmptySamples);
        }
        if bins == 0 {
            return Err(VisualisationError::ZeroBins);
        }
        if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
            return Err(VisualisationError::NonFiniteSample { index });
        }

        let (mut lower, mut upper) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if upper <= lower {
            lower -= 0.5;
            upper += 0.5;
        }

        let width = (upper - lower) / bins as f64;
        let mut counts = vec![0u64; bins];
        for &value in samples {
            let index = (((value - lower) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        Ok(Self {
            lower,
            upper,
            counts,
        })
    }

    /// Lower edge of the first bin.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper edge of the last bin.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Per-bin counts.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Common bin width.
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// Largest bin count.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Total number of binned samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Outline of the histogram as a step line, from (lower, 0) to (upper, 0).
    fn outline(&self) -> Vec<(f64, f64)> {
        let width = self.bin_width();
        let mut points = Vec::with_capacity(2 * self.counts.len() + 2);
        points.push((self.lower, 0.0));
        for (i, &count) in self.counts.iter().enumerate() {
            let left = self.lower + i as f64 * width;
            points.push((left, count as f64));
            points.push((left + width, count as f64));
        }
        points.push((self.upper, 0.0));
        points
    }
}

/// Histogram of terminal prices with the initial price and sample mean marked.
#[derive(Debug, Clone)]
pub struct DistributionPlot {
    histogram: Histogram,
    initial_price: f64,
    mean: f64,
}

impl DistributionPlot {
    /// Builds the plot from raw samples.
    pub fn new(samples: &[f64], initial_price: f64, bins: usize) -> Result<Self, VisualisationError> {
        let histogram = Histogram::from_samples(samples, bins)?;
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Ok(Self {
            histogram,
            initial_price,
            mean,
        })
    }

    /// Underlying histogram.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Sample mean of the binned values.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Renders the chart into a `width` x `height` buffer.
    pub fn render_buffer(&self, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);

        let x_min = self.histogram.lower().min(self.initial_price);
        let x_max = self.histogram.upper().max(self.initial_price);
        let y_max = (self.histogram.max_count() as f64 * 1.1).max(1.0);

        let outline = self.histogram.outline();
        let initial_marker = [(self.initial_price, 0.0), (self.initial_price, y_max)];
        let mean_marker = [(self.mean, 0.0), (self.mean, y_max)];

        let initial_label = format!("Initial Price: {:.2}", self.initial_price);
        let mean_label = format!("Mean Price: {:.2}", self.mean);

        let datasets = vec![
            Dataset::default()
                .name("Frequency")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Blue))
                .data(&outline),
            Dataset::default()
                .name(initial_label)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&initial_marker),
            Dataset::default()
                .name(mean_label)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&mean_marker),
        ];

        let x_mid = 0.5 * (x_min + x_max);
        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(format!(" {} ", DEFAULT_TITLE))
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title("Stock Price")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([x_min, x_max])
                    .labels(vec![
                        Span::raw(format!("{:.1}", x_min)),
                        Span::raw(format!("{:.1}", x_mid)),
                        Span::raw(format!("{:.1}", x_max)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("Frequency")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, y_max])
                    .labels(vec![
                        Span::raw("0"),
                        Span::raw(format!("{:.0}", y_max / 2.0)),
                        Span::raw(format!("{:.0}", y_max)),
                    ]),
            )
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        chart.render(area, &mut buffer);
        buffer
    }

    /// Renders the chart as text followed by a one-line marker summary.
    pub fn render(&self, width: u16, height: u16) -> String {
        let mut text = buffer_to_string(&self.render_buffer(width, height));
        text.push_str(&format!(
            "Initial Price: {:.2} | Mean Price: {:.2} | Samples: {}\n",
            self.initial_price,
            self.mean,
            self.histogram.total()
        ));
        text
    }
}

/// Flattens a buffer into newline-separated rows with trailing spaces trimmed.
fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        let mut row = String::with_capacity(area.width as usize);
        for x in area.left()..area.right() {
            row.push_str(buffer.get(x, y).symbol());
        }
        text.push_str(row.trim_end());
        text.push('\n');
    }
    text
}
