use tienda_artifacts::PcaResult;

/// Projected points as `(pc1, pc2)` pairs for the scatter dataset.
#[must_use]
pub fn pca_points(pca: &PcaResult) -> Vec<(f64, f64)> {
    pca.data_points
        .iter()
        .map(|point| (point.pc1, point.pc2))
        .collect()
}

/// Axis title carrying the explained-variance percentage.
///
/// `ratio` is the fraction reported by the pipeline; it renders with one
/// decimal, so `0.62` becomes `"PC1 (62.0% variance)"`.
#[must_use]
pub fn variance_axis_label(pc_term: &str, variance_term: &str, ratio: f64) -> String {
    format!("{pc_term} ({:.1}% {variance_term})", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use tienda_artifacts::PcaPoint;

    use super::*;

    #[test]
    fn axis_label_renders_percentage_with_one_decimal() {
        assert_eq!(
            variance_axis_label("PC1", "variance", 0.62),
            "PC1 (62.0% variance)"
        );
        assert_eq!(
            variance_axis_label("CP2", "varianza", 0.21),
            "CP2 (21.0% varianza)"
        );
    }

    #[test]
    fn points_keep_projection_order() {
        let pca = PcaResult {
            explained_variance_ratio: vec![0.62, 0.21],
            data_points: vec![
                PcaPoint { pc1: -1.0, pc2: 0.5 },
                PcaPoint { pc1: 2.0, pc2: -0.25 },
            ],
        };
        assert_eq!(pca_points(&pca), vec![(-1.0, 0.5), (2.0, -0.25)]);
    }
}
