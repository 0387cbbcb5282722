//! Number formatting for serialized measurements.

use serde::Serializer;

/// Largest magnitude below which every whole `f64` is exactly an `i64`.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Serialize whole values as integers (`900`, not `900.0`).
pub fn whole_as_int<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < EXACT_INT_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        #[serde(serialize_with = "whole_as_int")]
        value: f64,
    }

    fn json(value: f64) -> String {
        serde_json::to_string(&Sample { value }).unwrap()
    }

    #[test]
    fn test_whole_values_print_as_integers() {
        assert_eq!(json(900.0), r#"{"value":900}"#);
        assert_eq!(json(0.0), r#"{"value":0}"#);
        assert_eq!(json(-12.0), r#"{"value":-12}"#);
    }

    #[test]
    fn test_fractional_values_unchanged() {
        assert_eq!(json(958.4), r#"{"value":958.4}"#);
        assert_eq!(json(0.7), r#"{"value":0.7}"#);
    }
}
