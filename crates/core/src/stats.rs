//! Basic statistics over numeric slices.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::{Debug, Display};

/// Numbers that can be summarized.
///
/// Sums are accumulated in [`Numeric::Total`], which is wide enough that
/// adding up a slice of integers cannot overflow: `i128` for signed inputs,
/// `u128` for unsigned ones. Floats total in their own type.
pub trait Numeric: Copy + PartialOrd + Display + Serialize + Into<Value> {
    type Total: Copy + PartialEq + Debug + Display + Serialize;

    fn zero() -> Self::Total;
    fn accumulate(total: Self::Total, n: Self) -> Self::Total;
    fn total_to_f64(total: Self::Total) -> f64;
    fn total_to_value(total: Self::Total) -> Value;
}

macro_rules! impl_numeric_int {
    ($($t:ty => $total:ty),*) => {
        $(
            impl Numeric for $t {
                type Total = $total;

                fn zero() -> $total {
                    0
                }

                fn accumulate(total: $total, n: $t) -> $total {
                    total + <$total>::from(n)
                }

                fn total_to_f64(total: $total) -> f64 {
                    total as f64
                }

                fn total_to_value(total: $total) -> Value {
                    if let Ok(n) = i64::try_from(total) {
                        Value::from(n)
                    } else if let Ok(n) = u64::try_from(total) {
                        Value::from(n)
                    } else {
                        Value::from(total as f64)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                type Total = $t;

                fn zero() -> $t {
                    0.0
                }

                fn accumulate(total: $t, n: $t) -> $t {
                    total + n
                }

                fn total_to_f64(total: $t) -> f64 {
                    total as f64
                }

                fn total_to_value(total: $t) -> Value {
                    Value::from(total)
                }
            }
        )*
    };
}

impl_numeric_int!(i32 => i128, i64 => i128, u32 => u128, u64 => u128);
impl_numeric_float!(f32, f64);

/// Count, sum, average, min and max of a non-empty sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<T: Numeric> {
    pub count: usize,
    pub sum: T::Total,
    pub average: f64,
    pub min: T,
    pub max: T,
}

/// Summarize `numbers`, or `None` when the slice is empty.
///
/// The slice is only read. Min and max use `PartialOrd`, so a NaN never
/// replaces the running minimum or maximum.
pub fn summarize<T: Numeric>(numbers: &[T]) -> Option<Summary<T>> {
    let (&first, rest) = numbers.split_first()?;

    let (min, max) = rest.iter().fold((first, first), |(min, max), &n| {
        (
            if n < min { n } else { min },
            if n > max { n } else { max },
        )
    });

    let count = numbers.len();
    let sum = numbers.iter().fold(T::zero(), |total, &n| T::accumulate(total, n));

    Some(Summary {
        count,
        sum,
        average: T::total_to_f64(sum) / count as f64,
        min,
        max,
    })
}

/// Mapping form of [`summarize`]: empty for empty input, five keys otherwise.
pub fn summary_map<T: Numeric>(numbers: &[T]) -> Map<String, Value> {
    let mut map = Map::new();

    if let Some(summary) = summarize(numbers) {
        map.insert("count".to_string(), summary.count.into());
        map.insert("sum".to_string(), T::total_to_value(summary.sum));
        map.insert("average".to_string(), summary.average.into());
        map.insert("min".to_string(), summary.min.into());
        map.insert("max".to_string(), summary.max.into());
    }

    map
}
