use tienda_artifacts::DataPoint;

/// Gender label used to split the income-vs-spending scatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// A gender value tagged with its provenance.
///
/// The cluster artifact does not carry a gender field yet, so the dashboard
/// derives a stand-in from the customer id's parity. The tag keeps that
/// approximation visible at the type level: once the pipeline publishes the
/// real attribute, [`derive_gender`] switches to constructing `Known` and
/// nothing downstream changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Taken from the source data.
    Known(Sex),
    /// Approximated from an unrelated field.
    Inferred(Sex),
}

impl Gender {
    /// The label itself, regardless of provenance.
    #[must_use]
    pub fn sex(self) -> Sex {
        match self {
            Gender::Known(sex) | Gender::Inferred(sex) => sex,
        }
    }
}

/// Derives the gender label for one customer record.
///
/// Parity stand-in: even customer ids read as female, odd as male. Always
/// returns [`Gender::Inferred`] until the artifact includes the real field.
#[must_use]
pub fn derive_gender(point: &DataPoint) -> Gender {
    let sex = if point.customer_id % 2 == 0 {
        Sex::Female
    } else {
        Sex::Male
    };
    Gender::Inferred(sex)
}

/// Scatter series split by gender, as `(income, spending)` pairs ready for
/// two chart datasets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenderSeries {
    pub male: Vec<(f64, f64)>,
    pub female: Vec<(f64, f64)>,
}

/// Partitions customer records into two disjoint gender series,
/// preserving input order within each series.
#[must_use]
pub fn partition_by_gender(points: &[DataPoint]) -> GenderSeries {
    let mut series = GenderSeries::default();
    for point in points {
        let pair = (point.monthly_income, point.average_spending);
        match derive_gender(point).sex() {
            Sex::Male => series.male.push(pair),
            Sex::Female => series.female.push(pair),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(customer_id: u64, income: f64, spending: f64) -> DataPoint {
        DataPoint {
            customer_id,
            monthly_income: income,
            average_spending: spending,
            cluster: 0,
        }
    }

    #[test]
    fn parity_stand_in_is_tagged_inferred() {
        assert_eq!(
            derive_gender(&point(4, 0.0, 0.0)),
            Gender::Inferred(Sex::Female)
        );
        assert_eq!(
            derive_gender(&point(7, 0.0, 0.0)),
            Gender::Inferred(Sex::Male)
        );
    }

    #[test]
    fn partition_is_disjoint_and_order_preserving() {
        let points = [
            point(1, 100.0, 10.0),
            point(2, 200.0, 20.0),
            point(3, 300.0, 30.0),
            point(4, 400.0, 40.0),
        ];
        let series = partition_by_gender(&points);
        assert_eq!(series.male, vec![(100.0, 10.0), (300.0, 30.0)]);
        assert_eq!(series.female, vec![(200.0, 20.0), (400.0, 40.0)]);
        assert_eq!(series.male.len() + series.female.len(), points.len());
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert_eq!(partition_by_gender(&[]), GenderSeries::default());
    }
}
