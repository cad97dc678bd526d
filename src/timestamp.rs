use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::Serializer;


/// Millisecond precision, the resolution timestamps are stored and served at.
pub fn truncate(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(3)
}

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` helper producing e.g. `2024-03-01T12:00:00.000Z`.
pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(ts))
}



#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn formats_with_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(format(&ts), "2024-03-01T12:00:00.000Z");
    }

    #[test]
    fn truncate_drops_sub_millisecond_part() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::microseconds(1_234_567);
        let cut = truncate(ts);
        assert_eq!(format(&cut), "2024-03-01T12:00:01.234Z");
        assert_eq!(truncate(cut), cut);
    }
}
