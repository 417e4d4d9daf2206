//! Pure grouping and counting over fetched frames. Nothing here touches
//! the store or keeps state between calls.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use super::types::*;
use super::AggregateError;
use crate::db::{Cell, Frame};
use crate::models::parse_day;

fn column<'a>(
    frame: &'a Frame,
    name: &str,
) -> Result<impl Iterator<Item = &'a Cell> + 'a, AggregateError> {
    frame
        .column(name)
        .ok_or_else(|| AggregateError::MissingColumn(name.to_string()))
}

/// Count rows per distinct non-null value of `column_name`, in order of
/// first appearance.
pub fn count_by(frame: &Frame, column_name: &str) -> Result<Vec<CategoryCount>, AggregateError> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for cell in column(frame, column_name)?.filter(|c| !c.is_null()) {
        let key = cell.to_string();
        match index.get(&key) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push(CategoryCount { category: key, count: 1 });
            }
        }
    }

    Ok(counts)
}

/// Count rows per calendar day of `column_name`, oldest first.
///
/// NULL dates are skipped; any other value that is not a date is an error.
pub fn daily_counts(frame: &Frame, column_name: &str) -> Result<Vec<DailyCount>, AggregateError> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for cell in column(frame, column_name)? {
        if cell.is_null() {
            continue;
        }
        let date = cell
            .as_str()
            .and_then(parse_day)
            .ok_or_else(|| AggregateError::InvalidDate {
                column: column_name.to_string(),
                value: cell.to_string(),
            })?;
        *days.entry(date).or_insert(0) += 1;
    }

    Ok(days
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect())
}

fn numeric_values(frame: &Frame, column_name: &str) -> Result<Vec<f64>, AggregateError> {
    column(frame, column_name)?
        .filter(|c| !c.is_null())
        .map(|c| {
            c.as_f64().ok_or_else(|| AggregateError::NotNumeric {
                column: column_name.to_string(),
                value: c.to_string(),
            })
        })
        .collect()
}

/// Equal-width histogram of a numeric column over `[min, max]`.
///
/// A column holding a single distinct value yields one bin of width 1.
pub fn histogram(
    frame: &Frame,
    column_name: &str,
    bins: usize,
) -> Result<Vec<HistogramBin>, AggregateError> {
    if bins == 0 {
        return Err(AggregateError::InvalidBins);
    }

    let values = numeric_values(frame, column_name)?;
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(vec![HistogramBin {
            lower: min,
            upper: min + 1.0,
            count: values.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }

    Ok(out)
}

/// Sum `value_column` per distinct `key_column`, in order of first
/// appearance. Rows with a NULL key or NULL value are skipped.
pub fn sum_by(
    frame: &Frame,
    key_column: &str,
    value_column: &str,
) -> Result<Vec<CategoryTotal>, AggregateError> {
    let keys = column(frame, key_column)?;
    let values = column(frame, value_column)?;

    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (key, value) in keys.zip(values) {
        if key.is_null() || value.is_null() {
            continue;
        }
        let amount = value.as_f64().ok_or_else(|| AggregateError::NotNumeric {
            column: value_column.to_string(),
            value: value.to_string(),
        })?;
        let key = key.to_string();
        match index.get(&key) {
            Some(&i) => totals[i].total += amount,
            None => {
                index.insert(key.clone(), totals.len());
                totals.push(CategoryTotal { category: key, total: amount });
            }
        }
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: &[&str], rows: Vec<Vec<Cell>>) -> Frame {
        Frame {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    fn appointments(dates: &[Option<&str>]) -> Frame {
        frame(
            &["app_id", "app_date"],
            dates
                .iter()
                .enumerate()
                .map(|(i, d)| vec![Cell::Integer(i as i64 + 1), Cell::from(*d)])
                .collect(),
        )
    }

    #[test]
    fn count_by_single_category() {
        let patients = frame(
            &["pat_id", "name", "age", "gender"],
            vec![vec![1i64.into(), "Jane Doe".into(), 34i64.into(), "F".into()]],
        );
        let counts = count_by(&patients, "gender").unwrap();
        assert_eq!(counts, vec![CategoryCount { category: "F".into(), count: 1 }]);
    }

    #[test]
    fn count_by_first_appearance_order_skips_null() {
        let bills = frame(
            &["payment_status"],
            vec![
                vec!["Pending".into()],
                vec!["Paid".into()],
                vec![Cell::Null],
                vec!["Pending".into()],
            ],
        );
        let counts = count_by(&bills, "payment_status").unwrap();
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: "Pending".into(), count: 2 },
                CategoryCount { category: "Paid".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn count_by_empty_and_missing_column() {
        let empty = frame(&["gender"], vec![]);
        assert!(count_by(&empty, "gender").unwrap().is_empty());
        assert!(matches!(
            count_by(&empty, "sex"),
            Err(AggregateError::MissingColumn(ref c)) if c == "sex"
        ));
    }

    #[test]
    fn daily_counts_one_entry_per_date_summing_to_rows() {
        let dates = [
            Some("2024-03-02"),
            Some("2024-03-01"),
            Some("2024-03-02"),
            Some("2024-03-05"),
            Some("2024-03-01"),
            Some("2024-03-02"),
        ];
        let daily = daily_counts(&appointments(&dates), "app_date").unwrap();
        assert_eq!(daily.len(), 3);
        assert_eq!(daily.iter().map(|d| d.count).sum::<usize>(), dates.len());
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(daily[0].count, 2);
        assert_eq!(daily[1].count, 3);
        assert_eq!(daily[2].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn daily_counts_groups_datetimes_by_day() {
        let daily = daily_counts(
            &appointments(&[Some("2024-03-01 09:00:00"), Some("2024-03-01T14:30:00"), None]),
            "app_date",
        )
        .unwrap();
        assert_eq!(daily, vec![DailyCount { date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), count: 2 }]);
    }

    #[test]
    fn daily_counts_accepts_fractional_seconds() {
        let daily = daily_counts(
            &appointments(&[Some("2024-03-01 09:00:00.250"), Some("2024-03-01T10:15:30.5")]),
            "app_date",
        )
        .unwrap();
        assert_eq!(daily, vec![DailyCount { date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), count: 2 }]);
    }

    #[test]
    fn daily_counts_rejects_garbage() {
        let err = daily_counts(&appointments(&[Some("next tuesday")]), "app_date").unwrap_err();
        assert!(matches!(err, AggregateError::InvalidDate { ref value, .. } if value == "next tuesday"));
    }

    #[test]
    fn histogram_spreads_over_range() {
        let ages = frame(
            &["age"],
            [0i64, 10, 20, 30, 40].iter().map(|a| vec![Cell::Integer(*a)]).chain([vec![Cell::Null]]).collect(),
        );
        let bins = histogram(&ages, "age", 4).unwrap();
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[3].upper, 40.0);
        assert_eq!(bins.iter().map(|b| b.count).collect::<Vec<_>>(), vec![1, 1, 1, 2]);
    }

    #[test]
    fn histogram_single_value_and_errors() {
        let ages = frame(&["age"], vec![vec![34i64.into()], vec![34i64.into()]]);
        let bins = histogram(&ages, "age", 20).unwrap();
        assert_eq!(bins, vec![HistogramBin { lower: 34.0, upper: 35.0, count: 2 }]);

        assert!(matches!(histogram(&ages, "age", 0), Err(AggregateError::InvalidBins)));

        let bad = frame(&["age"], vec![vec!["thirty".into()]]);
        assert!(matches!(histogram(&bad, "age", 5), Err(AggregateError::NotNumeric { .. })));

        let empty = frame(&["age"], vec![]);
        assert!(histogram(&empty, "age", 5).unwrap().is_empty());
    }

    #[test]
    fn sum_by_patient() {
        let bills = frame(
            &["pat_id", "amount"],
            vec![
                vec![2i64.into(), 100.0f64.into()],
                vec![1i64.into(), 40.0f64.into()],
                vec![2i64.into(), 25.5f64.into()],
                vec![Cell::Null, 999.0f64.into()],
            ],
        );
        let totals = sum_by(&bills, "pat_id", "amount").unwrap();
        assert_eq!(
            totals,
            vec![
                CategoryTotal { category: "2".into(), total: 125.5 },
                CategoryTotal { category: "1".into(), total: 40.0 },
            ]
        );
    }
}
