// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


/// Formats a duration in milliseconds into a `MM:SS.CC` string.
///
/// This is used for both the running total and every captured lap, so the
/// two always agree. Each field is truncated, never rounded, and padded to
/// at least two digits. Minutes are not wrapped into hours.
///
/// # Arguments
///
/// * `total_ms` - The duration to format, in milliseconds.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65_430), "01:05.43");
/// assert_eq!(format_time(3_600_000), "60:00.00");
/// ```
pub(crate) fn format_time(total_ms: u64) -> String {
    let mins = total_ms / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let centis = (total_ms % 1_000) / 10;
    format!("{:02}:{:02}.{:02}", mins, secs, centis)
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn formats_field_boundaries() {
        assert_eq!(format_time(0), "00:00.00");
        assert_eq!(format_time(999), "00:00.99");
        assert_eq!(format_time(1_000), "00:01.00");
        assert_eq!(format_time(60_000), "01:00.00");
        assert_eq!(format_time(3_600_000), "60:00.00");
    }

    #[test]
    fn truncates_sub_centisecond_remainder() {
        assert_eq!(format_time(9), "00:00.00");
        assert_eq!(format_time(59_999), "00:59.99");
    }

    #[test]
    fn minutes_grow_past_two_digits() {
        assert_eq!(format_time(100 * 60_000), "100:00.00");
        assert_eq!(format_time(6_000_010), "100:00.01");
    }

    #[test]
    fn same_input_gives_same_output() {
        assert_eq!(format_time(123_456), format_time(123_456));
        assert_eq!(format_time(123_456), "02:03.45");
    }
}
