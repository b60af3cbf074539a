//! Chart-ready data derivation for the tienda dashboard.
//!
//! Pure functions that turn loaded analysis artifacts into the structures
//! the presentation layer renders directly:
//!
//! - [`histogram`]: Fixed-width frequency buckets with display labels
//! - [`scatter`]: Income-vs-spending points partitioned by gender
//! - [`cluster`]: Per-cluster spending bars with stable palette assignment
//! - [`pca`]: Principal-component points and variance axis labels
//!
//! Nothing here performs I/O or mutates its inputs.

pub mod cluster;
pub mod histogram;
pub mod pca;
pub mod scatter;
