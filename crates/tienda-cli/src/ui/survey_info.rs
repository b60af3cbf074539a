//! The tabbed survey-information bar. The tab row and all five bodies
//! render from the views in [`crate::views`]; this file is layout only.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Row, Table, Widget},
};
use tienda_artifacts::ArtifactBundle;
use tienda_i18n::{Language, resolve};

use super::charts::cluster_color;
use crate::{tabs::Tab, util, views};

pub struct SurveyInfoBar<'a> {
    pub bundle: &'a ArtifactBundle,
    pub language: Language,
    pub tab: Tab,
}

impl Widget for SurveyInfoBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered();
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let [tabs_area, content_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        Widget::render(self.tabs_line(), tabs_area, buf);

        match self.tab {
            Tab::Overview => self.render_overview(content_area, buf),
            Tab::Participants => self.render_participants(content_area, buf),
            Tab::Areas => self.render_areas(content_area, buf),
            Tab::Variables => self.render_variables(content_area, buf),
            Tab::Details => self.render_details(content_area, buf),
        }
    }
}

impl SurveyInfoBar<'_> {
    fn tabs_line(&self) -> Line<'static> {
        let spans = Tab::ALL
            .into_iter()
            .enumerate()
            .map(|(index, tab)| {
                let style = if tab == self.tab {
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Span::styled(format!(" {}:{} ", index + 1, tab.title(self.language)), style)
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn render_overview(&self, area: Rect, buf: &mut Buffer) {
        let overview = views::overview_summary(&self.bundle.summary, &self.bundle.clusters);
        let status = if overview.complete {
            resolve(self.language, "survey_complete")
        } else {
            "-"
        };
        let cards = [
            (
                resolve(self.language, "survey_total_respondents"),
                util::thousands(overview.respondents),
            ),
            (
                resolve(self.language, "survey_gender_distribution"),
                overview.gender_ratio,
            ),
            (
                resolve(self.language, "survey_customer_groups"),
                overview.cluster_count.to_string(),
            ),
            (
                resolve(self.language, "survey_data_status"),
                status.to_owned(),
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

    fn render_participants(&self, area: Rect, buf: &mut Buffer) {
        let view = views::participants_view(&self.bundle.clusters, self.bundle.summary.n);
        let header = format!(
            "{} ({} {})",
            resolve(self.language, "survey_participants_list"),
            resolve(self.language, "survey_showing_first"),
            view.shown.len(),
        );

        let mut lines = vec![Line::styled(
            header,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        lines.extend(view.shown.iter().map(|point| {
            Line::raw(format!(
                "{} #{}  |  {} {}  |  {}: {}",
                resolve(self.language, "survey_customer"),
                point.customer_id,
                resolve(self.language, "label_cluster"),
                point.cluster,
                resolve(self.language, "label_income"),
                util::money_whole(point.monthly_income),
            ))
        }));
        lines.push(Line::styled(
            views::subset_message(&view, self.language),
            Style::default().fg(Color::Blue),
        ));

        Paragraph::new(lines).render(area, buf);
    }

    fn render_areas(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::styled(
            resolve(self.language, "survey_geographic_distribution"),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for card in views::area_cards(&self.bundle.clusters, self.language) {
            lines.push(Line::from(vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(cluster_color(card.cluster_id)),
                ),
                Span::styled(
                    format!(
                        "{} {} - {}",
                        resolve(self.language, "label_cluster"),
                        card.cluster_id,
                        card.zone_name,
                    ),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  ({} {})",
                    card.size,
                    resolve(self.language, "survey_people"),
                )),
            ]));
            lines.push(Line::raw(format!(
                "    {}: {}  |  {}: {}  |  {}: {:.2}",
                resolve(self.language, "kpi_avg_income"),
                util::money(card.mean_income),
                resolve(self.language, "kpi_avg_spending"),
                util::money(card.mean_spending),
                resolve(self.language, "kpi_avg_frequency"),
                card.mean_frequency,
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn render_variables(&self, area: Rect, buf: &mut Buffer) {
        let rows = views::variable_rows(self.language)
            .into_iter()
            .map(|row| Row::new([row.name, row.description]))
            .collect::<Vec<_>>();
        let table = Table::new(rows, [Constraint::Length(24), Constraint::Fill(1)]).header(
            Row::new([
                resolve(self.language, "var_variable"),
                resolve(self.language, "var_description"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        );

        Widget::render(table, area, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = views::detail_rows(&self.bundle.summary, self.language)
            .into_iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", row.label),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(row.value),
                ])
            })
            .collect::<Vec<_>>();

        lines.push(Line::raw(""));
        lines.push(Line::styled(
            resolve(self.language, "analysis_methods_title"),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for method in views::analysis_methods(self.language) {
            lines.push(Line::raw(format!(
                "• {}: {}",
                method.title, method.description
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
