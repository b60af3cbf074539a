use tienda_artifacts::ClusterStat;

/// Number of display colors available for clusters. Cluster ids beyond the
/// palette wrap around.
pub const PALETTE_SIZE: usize = 3;

/// Stable palette slot for a cluster id.
///
/// A pure function of the id, so the same cluster keeps the same color
/// across renders and across views.
///
/// # Examples
///
/// ```
/// # use tienda_charts::cluster::palette_index;
/// assert_eq!(palette_index(0), 0);
/// assert_eq!(palette_index(3), 0);
/// ```
#[must_use]
pub fn palette_index(cluster_id: u32) -> usize {
    cluster_id as usize % PALETTE_SIZE
}

/// One bar of the spending-by-cluster chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterBar {
    pub cluster_id: u32,
    /// `"{cluster_term} {id}"`; the term comes translated from the caller.
    pub label: String,
    pub mean_spending: f64,
    pub palette_index: usize,
}

/// Maps per-cluster statistics to chart bars.
#[must_use]
pub fn cluster_spending_bars(stats: &[ClusterStat], cluster_term: &str) -> Vec<ClusterBar> {
    stats
        .iter()
        .map(|stat| ClusterBar {
            cluster_id: stat.cluster_id,
            label: format!("{cluster_term} {}", stat.cluster_id),
            mean_spending: stat.mean_spending,
            palette_index: palette_index(stat.cluster_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(cluster_id: u32, mean_spending: f64) -> ClusterStat {
        ClusterStat {
            cluster_id,
            size: 10,
            mean_income: 0.0,
            mean_spending,
            mean_frequency: 0.0,
        }
    }

    #[test]
    fn palette_assignment_is_deterministic_and_wraps() {
        assert_eq!(palette_index(5), palette_index(5));
        let first_three = [palette_index(0), palette_index(1), palette_index(2)];
        assert_eq!(first_three, [0, 1, 2]);
        assert_eq!(palette_index(3), palette_index(0));
        assert_eq!(palette_index(4), palette_index(1));
    }

    #[test]
    fn bars_combine_term_and_id() {
        let bars = cluster_spending_bars(&[stat(0, 450.0), stat(1, 900.0)], "Grupo");
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "Grupo 0");
        assert_eq!(bars[1].label, "Grupo 1");
        assert_eq!(bars[1].mean_spending, 900.0);
        assert_eq!(bars[1].palette_index, 1);
    }
}
