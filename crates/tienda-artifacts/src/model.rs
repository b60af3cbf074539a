use serde::Deserialize;

/// All five analysis artifacts, loaded together.
///
/// The bundle is created once per run and never mutated; every view derives
/// read-only data from it.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub summary: SummaryStats,
    pub regression: RegressionResult,
    pub anova: AnovaResult,
    pub pca: PcaResult,
    pub clusters: ClusterResult,
}

/// Dataset-level summary statistics (`summary.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryStats {
    /// Number of survey respondents.
    pub n: u64,
    pub mean_income: f64,
    pub mean_frequency: f64,
    pub mean_spending: f64,
    pub gender_counts: GenderCounts,
    pub min_income: f64,
    pub max_income: f64,
}

/// Respondent counts per gender. Wire keys are the single-letter labels
/// used by the analysis pipeline.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GenderCounts {
    #[serde(rename = "M")]
    pub male: u64,
    #[serde(rename = "F")]
    pub female: u64,
}

/// Fitted linear model (`regression.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct RegressionResult {
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub f_statistic: f64,
    pub f_pvalue: f64,
    /// Coefficient rows in the order the model reports them
    /// (intercept first).
    pub coefficients: Vec<Coefficient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coefficient {
    pub variable: String,
    pub coefficient: f64,
    pub std_error: f64,
    pub t_value: f64,
    pub p_value: f64,
}

/// ANOVA table (`anova.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct AnovaResult {
    pub table: Vec<AnovaRow>,
}

/// One row of the ANOVA table. `f_value`/`p_value` are absent on the
/// residual and total rows.
#[derive(Debug, Clone, Deserialize)]
pub struct AnovaRow {
    pub source: String,
    pub sum_squares: f64,
    pub df: f64,
    #[serde(default)]
    pub f_value: Option<f64>,
    #[serde(default)]
    pub p_value: Option<f64>,
}

/// Two-component principal component projection (`pca.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct PcaResult {
    /// Fraction of variance explained per component, ordered. At least two
    /// components are present.
    pub explained_variance_ratio: Vec<f64>,
    pub data_points: Vec<PcaPoint>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PcaPoint {
    pub pc1: f64,
    pub pc2: f64,
}

/// K-means clustering output (`clusters.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterResult {
    pub n_clusters: u32,
    pub data_points: Vec<DataPoint>,
    pub cluster_statistics: Vec<ClusterStat>,
}

/// One customer record with its assigned cluster.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DataPoint {
    pub customer_id: u64,
    pub monthly_income: f64,
    pub average_spending: f64,
    pub cluster: u32,
}

/// Per-cluster aggregate statistics.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClusterStat {
    pub cluster_id: u32,
    pub size: u64,
    pub mean_income: f64,
    pub mean_spending: f64,
    pub mean_frequency: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_decodes_wire_gender_keys() {
        let json = r#"{
            "n": 200,
            "mean_income": 18500.5,
            "mean_frequency": 4.2,
            "mean_spending": 812.75,
            "gender_counts": {"M": 98, "F": 102},
            "min_income": 2500.0,
            "max_income": 60000.0
        }"#;
        let summary: SummaryStats = serde_json::from_str(json).unwrap();
        assert_eq!(summary.n, 200);
        assert_eq!(summary.gender_counts.male, 98);
        assert_eq!(summary.gender_counts.female, 102);
        assert_eq!(summary.gender_counts.male + summary.gender_counts.female, summary.n);
    }

    #[test]
    fn anova_rows_accept_missing_f_and_p() {
        let json = r#"{
            "table": [
                {"source": "Gender", "sum_squares": 1234.5, "df": 1.0, "f_value": 5.67, "p_value": 0.018},
                {"source": "Residual", "sum_squares": 98765.4, "df": 198.0}
            ]
        }"#;
        let anova: AnovaResult = serde_json::from_str(json).unwrap();
        assert_eq!(anova.table.len(), 2);
        assert!(anova.table[0].f_value.is_some());
        assert!(anova.table[1].f_value.is_none());
        assert!(anova.table[1].p_value.is_none());
    }

    #[test]
    fn pca_decodes_variance_ratio_pair() {
        let json = r#"{
            "explained_variance_ratio": [0.62, 0.21],
            "data_points": [{"pc1": -1.2, "pc2": 0.4}]
        }"#;
        let pca: PcaResult = serde_json::from_str(json).unwrap();
        assert_eq!(pca.explained_variance_ratio.len(), 2);
        assert_eq!(pca.data_points.len(), 1);
    }
}
