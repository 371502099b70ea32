use thiserror::Error;

use crate::population::population;
use crate::table::{CaseTable, Series};

/// Counts are rescaled to cases per this many inhabitants.
pub const PER_CAPITA_BASE: f64 = 1e5;

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    /// The column name has no entry in the population table. Passing
    /// such a column through unscaled would silently mix raw counts and
    /// per-100k rates in the same chart, so it is an error instead.
    #[error("unknown region: `{0}`")]
    UnknownRegion(String),
}

/// Rescale every region column to cases per 100 000 inhabitants.
///
/// Returns a new table of the same shape; the input is left untouched
/// and the date column carries through unchanged. Applying `normalize`
/// twice scales twice, it is not idempotent.
pub fn normalize(table: &CaseTable) -> Result<CaseTable, NormalizeError> {
    let mut series = Vec::with_capacity(table.series.len());
    for column in &table.series {
        let population = population(&column.region)
            .ok_or_else(|| NormalizeError::UnknownRegion(column.region.clone()))?;
        series.push(Series {
            region: column.region.clone(),
            values: column
                .values
                .iter()
                .map(|value| value * PER_CAPITA_BASE / population as f64)
                .collect(),
        });
    }

    Ok(CaseTable {
        dates: table.dates.clone(),
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CaseTable {
        "date,mazowieckie\n2020-03-01,10\n2020-03-02,20\n"
            .parse()
            .unwrap()
    }

    fn assert_close(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-4, "got {got}, want {want}");
    }

    #[test]
    fn rescales_to_cases_per_hundred_thousand() {
        let normalized = normalize(&sample()).unwrap();

        let column = normalized.column("mazowieckie").unwrap();
        assert_close(column[0], 0.1851);
        assert_close(column[1], 0.3702);
    }

    #[test]
    fn dates_carry_through_unchanged() {
        let table = sample();
        let normalized = normalize(&table).unwrap();
        assert_eq!(normalized.dates, table.dates);
    }

    #[test]
    fn does_not_mutate_its_input() {
        let table = sample();
        let before = table.clone();
        normalize(&table).unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn is_not_idempotent() {
        let once = normalize(&sample()).unwrap();
        let twice = normalize(&once).unwrap();
        assert_ne!(once, twice);
        assert_close(
            twice.column("mazowieckie").unwrap()[0],
            0.1851 * PER_CAPITA_BASE / 5_403_412.0,
        );
    }

    #[test]
    fn rejects_an_unknown_region() {
        let table: CaseTable = "date,mazowieckie,atlantis\n2020-03-01,10,4\n"
            .parse()
            .unwrap();
        assert_eq!(
            normalize(&table).unwrap_err(),
            NormalizeError::UnknownRegion(String::from("atlantis"))
        );
    }

    #[test]
    fn handles_all_sixteen_regions() {
        let header: Vec<&str> = crate::population::POPULATION
            .iter()
            .map(|&(name, _)| name)
            .collect();
        let csv = format!(
            "date,{}\n2020-03-01,{}\n",
            header.join(","),
            vec!["100"; header.len()].join(",")
        );
        let table: CaseTable = csv.parse().unwrap();

        let normalized = normalize(&table).unwrap();
        for (name, population) in crate::population::POPULATION {
            assert_close(
                normalized.column(name).unwrap()[0],
                100.0 * PER_CAPITA_BASE / population as f64,
            );
        }
    }
}
