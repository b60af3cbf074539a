//! Declarative rendering of the dashboard. Everything here draws from
//! already-derived data; no I/O, no mutation.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use tienda_artifacts::ArtifactBundle;
use tienda_i18n::{Language, resolve};

use crate::tabs::Tab;

use self::{
    charts::{ClusterSpending, GenderScatter, IncomeHistogram, PcaScatter},
    kpi::KpiCards,
    survey_info::SurveyInfoBar,
    tables::{AnovaTable, RegressionTable},
};

mod charts;
mod kpi;
mod survey_info;
mod tables;

pub fn draw_dashboard(frame: &mut Frame, bundle: &ArtifactBundle, language: Language, tab: Tab) {
    let [header_area, kpi_area, info_area, charts_area, tables_area, help_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(header_line(language), header_area);
    frame.render_widget(
        KpiCards {
            summary: &bundle.summary,
            language,
        },
        kpi_area,
    );
    frame.render_widget(
        SurveyInfoBar {
            bundle,
            language,
            tab,
        },
        info_area,
    );

    let [top_charts, bottom_charts] =
        Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(charts_area);
    let [histogram_area, scatter_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(top_charts);
    let [pca_area, cluster_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(bottom_charts);

    frame.render_widget(
        IncomeHistogram {
            clusters: &bundle.clusters,
            language,
        },
        histogram_area,
    );
    frame.render_widget(
        GenderScatter {
            clusters: &bundle.clusters,
            language,
        },
        scatter_area,
    );
    frame.render_widget(
        PcaScatter {
            pca: &bundle.pca,
            language,
        },
        pca_area,
    );
    frame.render_widget(
        ClusterSpending {
            clusters: &bundle.clusters,
            language,
        },
        cluster_area,
    );

    let [regression_area, anova_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(tables_area);
    frame.render_widget(
        RegressionTable {
            regression: &bundle.regression,
            language,
        },
        regression_area,
    );
    frame.render_widget(
        AnovaTable {
            anova: &bundle.anova,
            language,
        },
        anova_area,
    );

    frame.render_widget(help_line(language), help_area);
}

/// Full-page error state. Nothing else renders when the load failed; the
/// hint points at rerunning the upstream analysis.
pub fn draw_error_page(frame: &mut Frame, message: &str, language: Language) {
    let text = Text::from(vec![
        Line::styled(
            resolve(language, "error_loading_data"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(message),
        Line::raw(""),
        Line::styled(
            format!(
                "{} uv run python src/analysis.py",
                resolve(language, "error_rerun_hint")
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered();

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .areas(frame.area());
    frame.render_widget(text, middle);
}

pub fn draw_loading_page(frame: &mut Frame, language: Language) {
    let text = Text::raw(resolve(language, "loading_dashboard")).centered();
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(frame.area());
    frame.render_widget(text, middle);
}

fn header_line(language: Language) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            resolve(language, "nav_title"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            resolve(language, "nav_subtitle"),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn help_line(language: Language) -> Text<'static> {
    let toggle_label = match language {
        Language::En => "Español",
        Language::Es => "English",
    };
    Text::from(format!("1-5/←/→: Tabs | l: {toggle_label} | q/Esc: Quit"))
        .style(Style::default().fg(Color::DarkGray))
        .centered()
}
