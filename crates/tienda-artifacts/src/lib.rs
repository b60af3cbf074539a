//! Analysis artifact model and loader for the tienda dashboard.
//!
//! The offline analysis pipeline publishes five JSON artifacts (summary
//! statistics, regression, ANOVA, PCA, clustering). This crate defines the
//! matching data model and a loader that retrieves all five concurrently,
//! all-or-nothing: either the full [`ArtifactBundle`] is available or a
//! single [`LoadError`] is, never a partial mix.

pub use self::{
    loader::{ARTIFACT_FILES, ArtifactSource, HttpSource, LoadError, LoadState, load},
    model::{
        AnovaResult, AnovaRow, ArtifactBundle, ClusterResult, ClusterStat, Coefficient, DataPoint,
        GenderCounts, PcaPoint, PcaResult, RegressionResult, SummaryStats,
    },
};

mod loader;
mod model;
