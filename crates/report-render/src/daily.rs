//! Report 1: per-day maximum concurrent session count.

use report_data::daily::DailyMax;

/// Header line of the daily concurrency report.
pub const DAILY_REPORT_HEADER: &str = "День       Количество сессий";

/// Render the daily report: header, one `dd.MM.yyyy <count>` row per date,
/// and a trailing blank line.
pub fn render_daily_report(days: &[DailyMax]) -> String {
    let mut out = String::new();
    out.push_str(DAILY_REPORT_HEADER);
    out.push('\n');
    for day in days {
        out.push_str(&format!(
            "{} {}\n",
            day.date.format("%d.%m.%Y"),
            day.max_concurrent,
        ));
    }
    out.push('\n');
    out
}
