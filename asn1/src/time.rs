use chrono::NaiveDateTime;

use crate::error::{Error, Result};

const GENERALIZED_TIME_FORMAT: &str = "%Y%m%d%H%M%S%.fZ";

/// `YYMMDDHHMMSSZ`. Two-digit years follow RFC 5280: 50-99 are 19xx,
/// 00-49 are 20xx.
pub(crate) fn parse_utc_time(data: &[u8]) -> Result<NaiveDateTime> {
    if data.len() != 13 || data[12] != b'Z' || !data[..12].iter().all(u8::is_ascii_digit) {
        return Err(Error::UtcTimeInvalidFormat);
    }
    let yy = u32::from(data[0] - b'0') * 10 + u32::from(data[1] - b'0');
    let century = if yy >= 50 { 19 } else { 20 };
    let s = std::str::from_utf8(&data[2..]).map_err(|_| Error::UtcTimeInvalidFormat)?;
    NaiveDateTime::parse_from_str(&format!("{}{:02}{}", century, yy, s), "%Y%m%d%H%M%SZ")
        .map_err(|_| Error::UtcTimeInvalidFormat)
}

/// `YYYYMMDDHHMMSS[.f]Z`.
pub(crate) fn parse_generalized_time(data: &[u8]) -> Result<NaiveDateTime> {
    if data.len() < 15 || !data[..14].iter().all(u8::is_ascii_digit) {
        return Err(Error::GeneralizedTimeInvalidFormat);
    }
    let s = std::str::from_utf8(data).map_err(|_| Error::GeneralizedTimeInvalidFormat)?;
    NaiveDateTime::parse_from_str(s, GENERALIZED_TIME_FORMAT)
        .map_err(|_| Error::GeneralizedTimeInvalidFormat)
}

pub(crate) fn format_utc_time(time: &NaiveDateTime) -> String {
    time.format("%y%m%d%H%M%SZ").to_string()
}

/// DER drops trailing zeros of the fraction, and the point with them.
pub(crate) fn format_generalized_time(time: &NaiveDateTime) -> String {
    let seconds = time.format("%Y%m%d%H%M%S").to_string();
    let nanos = time.and_utc().timestamp_subsec_nanos();
    if nanos == 0 {
        return format!("{}Z", seconds);
    }
    let fraction = format!("{:09}", nanos);
    format!("{}.{}Z", seconds, fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use rstest::rstest;

    use super::{parse_generalized_time, parse_utc_time};
    use crate::error::Error;

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    #[rstest(input, expected,
        case("191216030210Z", "2019-12-16 03:02:10"),
        case("230214000000Z", "2023-02-14 00:00:00"),
        case("491231235959Z", "2049-12-31 23:59:59"),
        case("500101000000Z", "1950-01-01 00:00:00"),
        case("991231235959Z", "1999-12-31 23:59:59"),
    )]
    fn test_parse_utc_time(input: &str, expected: &str) {
        let expected = NaiveDateTime::parse_from_str(expected, FORMAT).unwrap();
        assert_eq!(expected, parse_utc_time(input.as_bytes()).unwrap());
    }

    #[rstest(input,
        case("1912160302Z"),
        case("191216030210"),
        case("191216030210+0900"),
        case("191316030210Z"),
        case("19121603021aZ"),
    )]
    fn test_parse_utc_time_rejects(input: &str) {
        assert_eq!(
            Error::UtcTimeInvalidFormat,
            parse_utc_time(input.as_bytes()).unwrap_err()
        );
    }

    #[rstest(input, expected,
        case("20191216030210Z", "2019-12-16 03:02:10"),
        case("20500101000000Z", "2050-01-01 00:00:00"),
        case("20191216030210.5Z", "2019-12-16 03:02:10.5"),
    )]
    fn test_parse_generalized_time(input: &str, expected: &str) {
        let expected = NaiveDateTime::parse_from_str(expected, FORMAT).unwrap();
        assert_eq!(expected, parse_generalized_time(input.as_bytes()).unwrap());
    }

    #[rstest(input,
        case("20191216030210"),
        case("201912160302Z"),
        case("20191216030210+0000"),
    )]
    fn test_parse_generalized_time_rejects(input: &str) {
        assert_eq!(
            Error::GeneralizedTimeInvalidFormat,
            parse_generalized_time(input.as_bytes()).unwrap_err()
        );
    }
}
