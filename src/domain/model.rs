use serde::{Deserialize, Serialize};

/// 日曆圖中的一格（一天）
///
/// 屬性值保持原始字串，缺少屬性時為 `None`；數值轉換留給聚合階段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: Option<String>,
    pub value: Option<String>,
}

impl ActivityRecord {
    pub fn new(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            value: Some(value.into()),
        }
    }
}

/// 半開區間 `[to, from)`，兩端皆為 `YYYY-MM-DD`
///
/// ISO 日期字串的字典序即時間順序，比較時不需要解析成日期。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub from: String,
    pub to: String,
}

impl DateInterval {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.to.as_str() <= date && date < self.from.as_str()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    /// 區間內所有數值的總和
    pub points: u64,
    /// 落在區間內的紀錄數
    pub matched: usize,
    /// 落在區間內但數值無法轉換（以 0 計）的紀錄數
    pub degraded: usize,
}

impl AggregateSummary {
    pub fn is_degraded(&self) -> bool {
        self.degraded > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_half_open() {
        let interval = DateInterval::new("2024-01-06", "2024-01-01");
        assert!(interval.contains("2024-01-01"));
        assert!(interval.contains("2024-01-05"));
        assert!(!interval.contains("2024-01-06"));
        assert!(!interval.contains("2023-12-31"));
    }

    #[test]
    fn test_empty_interval_contains_nothing() {
        let interval = DateInterval::new("2024-01-01", "2024-01-01");
        assert!(!interval.contains("2024-01-01"));
    }
}
