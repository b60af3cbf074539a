//! Derivations backing each survey-information tab.
//!
//! All functions here are pure reads over the loaded bundle; switching tabs
//! only re-runs these and redraws.

use tienda_artifacts::{ClusterResult, DataPoint, SummaryStats};
use tienda_i18n::{Language, resolve};

/// Fixed number of customer records shown on the participants tab.
pub const PARTICIPANT_WINDOW: usize = 10;

/// Overview tab: headline counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewSummary {
    pub respondents: u64,
    /// `"{male}M / {female}F"`.
    pub gender_ratio: String,
    pub cluster_count: u32,
    /// Static completeness flag; the dashboard only ever renders a fully
    /// loaded bundle.
    pub complete: bool,
}

#[must_use]
pub fn overview_summary(summary: &SummaryStats, clusters: &ClusterResult) -> OverviewSummary {
    OverviewSummary {
        respondents: summary.n,
        gender_ratio: format!(
            "{}M / {}F",
            summary.gender_counts.male, summary.gender_counts.female
        ),
        cluster_count: clusters.n_clusters,
        complete: true,
    }
}

/// Participants tab: a fixed window over the cluster data points, not
/// paginated.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantsView<'a> {
    pub shown: &'a [DataPoint],
    pub total: u64,
}

#[must_use]
pub fn participants_view(clusters: &ClusterResult, total: u64) -> ParticipantsView<'_> {
    let end = clusters.data_points.len().min(PARTICIPANT_WINDOW);
    ParticipantsView {
        shown: &clusters.data_points[..end],
        total,
    }
}

/// Localized `"Viewing {shown} of {total} total participants"` line.
#[must_use]
pub fn subset_message(view: &ParticipantsView<'_>, language: Language) -> String {
    format!(
        "{} {} {} {} {}",
        resolve(language, "survey_viewing_subset"),
        view.shown.len(),
        resolve(language, "survey_of"),
        view.total,
        resolve(language, "survey_total_participants"),
    )
}

/// Areas tab: one card per cluster statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaCard {
    pub cluster_id: u32,
    pub zone_name: String,
    pub size: u64,
    pub mean_income: f64,
    pub mean_spending: f64,
    pub mean_frequency: f64,
}

#[must_use]
pub fn area_cards(clusters: &ClusterResult, language: Language) -> Vec<AreaCard> {
    clusters
        .cluster_statistics
        .iter()
        .map(|stat| AreaCard {
            cluster_id: stat.cluster_id,
            zone_name: zone_name(stat.cluster_id, language),
            size: stat.size,
            mean_income: stat.mean_income,
            mean_spending: stat.mean_spending,
            mean_frequency: stat.mean_frequency,
        })
        .collect()
}

/// Zone label for a cluster id. Ids beyond the three named zones fall back
/// to a generic untranslated label, matching the upstream pipeline's
/// labeling.
#[must_use]
pub fn zone_name(cluster_id: u32, language: Language) -> String {
    match cluster_id {
        0 => resolve(language, "zone_economic").to_owned(),
        1 => resolve(language, "zone_moderate").to_owned(),
        2 => resolve(language, "zone_premium").to_owned(),
        id => format!("Zone {id}"),
    }
}

/// Variables tab: static description of the eight source variables. No
/// artifact dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableRow {
    pub name: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn variable_rows(language: Language) -> Vec<VariableRow> {
    const KEYS: [(&str, &str); 8] = [
        ("var_id", "var_id_desc"),
        ("var_age", "var_age_desc"),
        ("var_gender", "var_gender_desc"),
        ("var_monthly_income", "var_monthly_income_desc"),
        ("var_purchase_frequency", "var_purchase_frequency_desc"),
        ("var_avg_spending", "var_avg_spending_desc"),
        ("var_satisfaction", "var_satisfaction_desc"),
        ("var_preferred_category", "var_preferred_category_desc"),
    ];
    KEYS.iter()
        .map(|&(name_key, desc_key)| VariableRow {
            name: resolve(language, name_key),
            description: resolve(language, desc_key),
        })
        .collect()
}

/// Details tab: survey metadata rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[must_use]
pub fn detail_rows(summary: &SummaryStats, language: Language) -> Vec<DetailRow> {
    vec![
        DetailRow {
            label: resolve(language, "survey_collection_period"),
            value: "2024-2025".to_owned(),
        },
        DetailRow {
            label: resolve(language, "survey_methodology"),
            value: resolve(language, "survey_random_sampling").to_owned(),
        },
        DetailRow {
            label: resolve(language, "survey_data_type"),
            value: resolve(language, "survey_quantitative").to_owned(),
        },
        DetailRow {
            label: resolve(language, "survey_variables"),
            value: "8".to_owned(),
        },
        DetailRow {
            label: resolve(language, "survey_income_range"),
            value: format!("${:.0} - ${:.0} MXN", summary.min_income, summary.max_income),
        },
        DetailRow {
            label: resolve(language, "survey_analysis_types"),
            value: resolve(language, "survey_multivariate").to_owned(),
        },
    ]
}

/// Details tab: the four analysis methods the pipeline ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisMethod {
    pub title: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn analysis_methods(language: Language) -> Vec<AnalysisMethod> {
    const KEYS: [(&str, &str); 4] = [
        ("analysis_regression", "analysis_regression_desc"),
        ("analysis_anova", "analysis_anova_desc"),
        ("analysis_pca", "analysis_pca_desc"),
        ("analysis_cluster", "analysis_cluster_desc"),
    ];
    KEYS.iter()
        .map(|&(title_key, desc_key)| AnalysisMethod {
            title: resolve(language, title_key),
            description: resolve(language, desc_key),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tienda_artifacts::{ClusterStat, GenderCounts};

    use super::*;

    fn fixture_summary() -> SummaryStats {
        SummaryStats {
            n: 200,
            mean_income: 18500.5,
            mean_frequency: 4.2,
            mean_spending: 812.75,
            gender_counts: GenderCounts { male: 98, female: 102 },
            min_income: 2500.0,
            max_income: 60000.0,
        }
    }

    fn fixture_clusters(point_count: u64) -> ClusterResult {
        let data_points = (0..point_count)
            .map(|customer_id| DataPoint {
                customer_id,
                monthly_income: 5000.0 + customer_id as f64,
                average_spending: 300.0,
                cluster: (customer_id % 3) as u32,
            })
            .collect();
        ClusterResult {
            n_clusters: 3,
            data_points,
            cluster_statistics: (0..3)
                .map(|cluster_id| ClusterStat {
                    cluster_id,
                    size: point_count / 3,
                    mean_income: 10000.0,
                    mean_spending: 500.0,
                    mean_frequency: 3.5,
                })
                .collect(),
        }
    }

    #[test]
    fn overview_summarizes_headline_counts() {
        let overview = overview_summary(&fixture_summary(), &fixture_clusters(200));
        assert_eq!(overview.respondents, 200);
        assert_eq!(overview.gender_ratio, "98M / 102F");
        assert_eq!(overview.cluster_count, 3);
        assert!(overview.complete);
    }

    #[test]
    fn participants_window_exposes_first_ten_in_order() {
        let clusters = fixture_clusters(200);
        let view = participants_view(&clusters, 200);
        assert_eq!(view.shown.len(), 10);
        let ids = view.shown.iter().map(|p| p.customer_id).collect::<Vec<_>>();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
        assert_eq!(view.total, 200);
    }

    #[test]
    fn participants_window_shrinks_for_small_datasets() {
        let clusters = fixture_clusters(4);
        let view = participants_view(&clusters, 4);
        assert_eq!(view.shown.len(), 4);
    }

    #[test]
    fn subset_message_reports_shown_of_total() {
        let clusters = fixture_clusters(200);
        let view = participants_view(&clusters, 200);
        let message = subset_message(&view, Language::En);
        assert_eq!(message, "Viewing 10 of 200 total participants");
        let mensaje = subset_message(&view, Language::Es);
        assert_eq!(mensaje, "Visualizando 10 de 200 participantes totales");
    }

    #[test]
    fn area_cards_carry_zone_names() {
        let cards = area_cards(&fixture_clusters(30), Language::En);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].zone_name, "Economic Zone");
        assert_eq!(cards[1].zone_name, "Moderate Zone");
        assert_eq!(cards[2].zone_name, "Premium Zone");
    }

    #[test]
    fn unseen_cluster_ids_get_generic_zone_label() {
        assert_eq!(zone_name(7, Language::En), "Zone 7");
        assert_eq!(zone_name(7, Language::Es), "Zone 7");
    }

    #[test]
    fn variables_table_is_static_and_bilingual() {
        let english = variable_rows(Language::En);
        assert_eq!(english.len(), 8);
        assert_eq!(english[0].name, "ID");
        let spanish = variable_rows(Language::Es);
        assert_eq!(spanish[1].name, "Edad");
    }

    #[test]
    fn details_include_income_range_from_summary() {
        let rows = detail_rows(&fixture_summary(), Language::En);
        let range = rows
            .iter()
            .find(|row| row.label == "Income Range")
            .expect("income range row");
        assert_eq!(range.value, "$2500 - $60000 MXN");
    }

    #[test]
    fn four_analysis_methods_are_listed() {
        let methods = analysis_methods(Language::En);
        assert_eq!(methods.len(), 4);
        assert_eq!(methods[0].title, "Multiple Regression");
        assert_eq!(methods[3].title, "Cluster Analysis");
    }
}
