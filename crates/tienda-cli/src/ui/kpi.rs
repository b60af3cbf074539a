use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use tienda_artifacts::SummaryStats;
use tienda_i18n::{Language, resolve};

use crate::util;

/// The four headline cards above the charts.
pub struct KpiCards<'a> {
    pub summary: &'a SummaryStats,
    pub language: Language,
}

impl Widget for KpiCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let cards = [
            (
                resolve(self.language, "kpi_total_customers"),
                util::thousands(self.summary.n),
            ),
            (
                resolve(self.language, "kpi_avg_income"),
                util::money(self.summary.mean_income),
            ),
            (
                resolve(self.language, "kpi_avg_frequency"),
                format!("{:.2}", self.summary.mean_frequency),
            ),
            (
                resolve(self.language, "kpi_avg_spending"),
                util::money(self.summary.mean_spending),
            ),
        ];

        let areas: [Rect; 4] = Layout::horizontal([Constraint::Fill(1); 4]).areas(area);
        for ((title, value), card_area) in cards.into_iter().zip(areas) {
            let value_line =
                Line::styled(value, Style::default().add_modifier(Modifier::BOLD)).centered();
            Paragraph::new(value_line)
                .block(Block::bordered().title(title))
                .render(card_area, buf);
        }
    }
}
