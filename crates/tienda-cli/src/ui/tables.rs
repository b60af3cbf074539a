//! Regression and ANOVA result tables.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Row, Table, Widget},
};
use tienda_artifacts::{AnovaResult, RegressionResult};
use tienda_i18n::{Language, resolve};

use crate::util;

const MODEL_FORMULA: &str = "AverageSpending ~ MonthlyIncome + PurchaseFrequency";

pub struct RegressionTable<'a> {
    pub regression: &'a RegressionResult,
    pub language: Language,
}

impl Widget for RegressionTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered().title(resolve(self.language, "table_regression_title"));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let [summary_area, table_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(inner);

        let regression = self.regression;
        let summary = vec![
            labeled_line(
                resolve(self.language, "regression_model"),
                MODEL_FORMULA.to_owned(),
            ),
            labeled_line(
                resolve(self.language, "regression_r_squared"),
                format!("{:.4}", regression.r_squared),
            ),
            labeled_line(
                resolve(self.language, "regression_adj_r_squared"),
                format!("{:.4}", regression.adj_r_squared),
            ),
            labeled_line(
                resolve(self.language, "regression_f_statistic"),
                format!(
                    "{:.2} (p = {:.6})",
                    regression.f_statistic, regression.f_pvalue
                ),
            ),
        ];
        Paragraph::new(summary).render(summary_area, buf);

        let rows = regression
            .coefficients
            .iter()
            .map(|coefficient| {
                Row::new([
                    coefficient.variable.clone(),
                    format!("{:.4}", coefficient.coefficient),
                    format!("{:.4}", coefficient.std_error),
                    format!("{:.3}", coefficient.t_value),
                    util::p_value(coefficient.p_value),
                ])
            })
            .collect::<Vec<_>>();
        let table = Table::new(rows, [Constraint::Fill(1); 5]).header(
            Row::new([
                resolve(self.language, "header_variable"),
                resolve(self.language, "header_coefficient"),
                resolve(self.language, "header_std_error"),
                resolve(self.language, "header_t_value"),
                resolve(self.language, "header_p_value"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        Widget::render(table, table_area, buf);
    }
}

pub struct AnovaTable<'a> {
    pub anova: &'a AnovaResult,
    pub language: Language,
}

impl Widget for AnovaTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered().title(resolve(self.language, "table_anova_title"));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let [formula_area, table_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        Paragraph::new(labeled_line(
            resolve(self.language, "anova_model"),
            resolve(self.language, "anova_model_formula").to_owned(),
        ))
        .render(formula_area, buf);

        // Residual rows carry no F statistic or p-value; those cells render
        // a dash.
        let rows = self
            .anova
            .table
            .iter()
            .map(|row| {
                Row::new([
                    row.source.clone(),
                    format!("{:.2}", row.sum_squares),
                    format!("{:.0}", row.df),
                    util::opt_f_value(row.f_value),
                    util::opt_p_value(row.p_value),
                ])
            })
            .collect::<Vec<_>>();
        let table = Table::new(rows, [Constraint::Fill(1); 5]).header(
            Row::new([
                resolve(self.language, "header_source"),
                resolve(self.language, "header_sum_squares"),
                resolve(self.language, "header_df"),
                resolve(self.language, "header_f_value"),
                resolve(self.language, "header_p_value"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        Widget::render(table, table_area, buf);
    }
}

fn labeled_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}
