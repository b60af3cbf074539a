//! The four analysis charts. Each widget derives its data through
//! `tienda_charts` and only handles layout and color here.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Direction,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Bar, BarChart, Block, Chart, Dataset, Widget},
};
use tienda_artifacts::{ClusterResult, PcaResult};
use tienda_charts::{
    cluster::{PALETTE_SIZE, cluster_spending_bars, palette_index},
    histogram::histogram,
    pca::{pca_points, variance_axis_label},
    scatter::partition_by_gender,
};
use tienda_i18n::{Language, resolve};

/// Display colors for clusters, indexed by
/// [`palette_index`](tienda_charts::cluster::palette_index).
pub const CLUSTER_PALETTE: [Color; PALETTE_SIZE] = [Color::Green, Color::Yellow, Color::Red];

/// Stable display color for a cluster id.
#[must_use]
pub fn cluster_color(cluster_id: u32) -> Color {
    CLUSTER_PALETTE[palette_index(cluster_id)]
}

const INCOME_BINS: usize = 10;

pub struct IncomeHistogram<'a> {
    pub clusters: &'a ClusterResult,
    pub language: Language,
}

impl Widget for IncomeHistogram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let incomes = self
            .clusters
            .data_points
            .iter()
            .map(|point| point.monthly_income)
            .collect::<Vec<_>>();
        let chart = BarChart::new(
            histogram(&incomes, INCOME_BINS)
                .iter()
                .map(|bucket| {
                    Bar::with_label(bucket.label.clone(), bucket.count)
                        .text_value(bucket.count.to_string())
                })
                .collect::<Vec<_>>(),
        )
        .direction(Direction::Horizontal)
        .bar_gap(0)
        .block(Block::bordered().title(resolve(self.language, "chart_income_distribution")));

        Widget::render(chart, area, buf);
    }
}

pub struct GenderScatter<'a> {
    pub clusters: &'a ClusterResult,
    pub language: Language,
}

impl Widget for GenderScatter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let series = partition_by_gender(&self.clusters.data_points);
        let x_bounds = value_bounds(series.male.iter().chain(&series.female).map(|&(x, _)| x));
        let y_bounds = value_bounds(series.male.iter().chain(&series.female).map(|&(_, y)| y));

        let datasets = vec![
            Dataset::default()
                .name(resolve(self.language, "label_male"))
                .marker(Marker::Dot)
                .style(Style::default().fg(Color::Blue))
                .data(&series.male),
            Dataset::default()
                .name(resolve(self.language, "label_female"))
                .marker(Marker::Dot)
                .style(Style::default().fg(Color::Red))
                .data(&series.female),
        ];
        let chart = Chart::new(datasets)
            .block(Block::bordered().title(resolve(self.language, "chart_income_vs_spending")))
            .x_axis(labeled_axis(
                resolve(self.language, "label_income").to_owned(),
                x_bounds,
            ))
            .y_axis(labeled_axis(
                resolve(self.language, "label_spending").to_owned(),
                y_bounds,
            ));

        Widget::render(chart, area, buf);
    }
}

pub struct PcaScatter<'a> {
    pub pca: &'a PcaResult,
    pub language: Language,
}

impl Widget for PcaScatter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let points = pca_points(self.pca);
        let x_bounds = value_bounds(points.iter().map(|&(x, _)| x));
        let y_bounds = value_bounds(points.iter().map(|&(_, y)| y));

        let variance_term = resolve(self.language, "label_variance");
        let ratio = |index: usize| {
            self.pca
                .explained_variance_ratio
                .get(index)
                .copied()
                .unwrap_or(0.0)
        };
        let x_title =
            variance_axis_label(resolve(self.language, "label_pc1"), variance_term, ratio(0));
        let y_title =
            variance_axis_label(resolve(self.language, "label_pc2"), variance_term, ratio(1));

        let dataset = Dataset::default()
            .name(resolve(self.language, "label_customers"))
            .marker(Marker::Dot)
            .style(Style::default().fg(Color::Magenta))
            .data(&points);
        let chart = Chart::new(vec![dataset])
            .block(Block::bordered().title(resolve(self.language, "chart_pca")))
            .x_axis(labeled_axis(x_title, x_bounds))
            .y_axis(labeled_axis(y_title, y_bounds));

        Widget::render(chart, area, buf);
    }
}

pub struct ClusterSpending<'a> {
    pub clusters: &'a ClusterResult,
    pub language: Language,
}

impl Widget for ClusterSpending<'_> {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars = cluster_spending_bars(
            &self.clusters.cluster_statistics,
            resolve(self.language, "label_cluster"),
        );
        let chart = BarChart::new(
            bars.iter()
                .map(|bar| {
                    Bar::with_label(bar.label.clone(), bar.mean_spending.round() as u64)
                        .style(Style::default().fg(CLUSTER_PALETTE[bar.palette_index]))
                        .text_value(format!("{:.0}", bar.mean_spending))
                })
                .collect::<Vec<_>>(),
        )
        .direction(Direction::Horizontal)
        .bar_gap(0)
        .block(Block::bordered().title(resolve(self.language, "chart_spending_by_cluster")));

        Widget::render(chart, area, buf);
    }
}

/// Axis bounds covering all values, with a fallback range when the series
/// is empty.
fn value_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    if min > max { [0.0, 1.0] } else { [min, max] }
}

fn labeled_axis(title: String, bounds: [f64; 2]) -> Axis<'static> {
    Axis::default().title(title).bounds(bounds).labels([
        format!("{:.0}", bounds[0]),
        format!("{:.0}", f64::midpoint(bounds[0], bounds[1])),
        format!("{:.0}", bounds[1]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_colors_are_distinct_within_palette() {
        assert_ne!(cluster_color(0), cluster_color(1));
        assert_ne!(cluster_color(1), cluster_color(2));
        assert_ne!(cluster_color(0), cluster_color(2));
    }

    #[test]
    fn cluster_colors_wrap_beyond_palette() {
        assert_eq!(cluster_color(3), cluster_color(0));
        assert_eq!(cluster_color(4), cluster_color(1));
    }

    #[test]
    fn bounds_cover_all_values() {
        assert_eq!(value_bounds([3.0, -1.0, 2.0].into_iter()), [-1.0, 3.0]);
    }

    #[test]
    fn empty_series_get_fallback_bounds() {
        assert_eq!(value_bounds(std::iter::empty()), [0.0, 1.0]);
    }
}
