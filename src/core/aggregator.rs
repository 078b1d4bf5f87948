use crate::core::{ActivityRecord, AggregateSummary, DateInterval};

/// 區間內的數值總和，永遠不會失敗
pub fn aggregate(records: &[ActivityRecord], interval: &DateInterval) -> u64 {
    summarize(records, interval).points
}

/// 與 [`aggregate`] 相同的總和，另外統計命中數與無法轉換的數值
pub fn summarize(records: &[ActivityRecord], interval: &DateInterval) -> AggregateSummary {
    records
        .iter()
        .filter(|record| {
            record
                .date
                .as_deref()
                .is_some_and(|date| interval.contains(date))
        })
        .fold(AggregateSummary::default(), |mut summary, record| {
            summary.matched += 1;
            match coerce_value(record.value.as_deref()) {
                Some(value) => summary.points = summary.points.saturating_add(value),
                None => summary.degraded += 1,
            }
            summary
        })
}

// 無法轉為非負整數者回傳 None，呼叫端以 0 計
fn coerce_value(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok()
}
