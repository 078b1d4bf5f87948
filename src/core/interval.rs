use crate::core::{Clock, DateInterval};
use chrono::{DateTime, Duration, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// 系統時鐘
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 以 `now` 為終點、往前 `day_count` 天的區間
///
/// `day_count` 需為有限且非負的數值，由呼叫端驗證。
pub fn compute_interval(day_count: f64, now: DateTime<Utc>) -> DateInterval {
    let offset = Duration::milliseconds((day_count * MILLIS_PER_DAY).round() as i64);
    let start = now - offset;

    DateInterval {
        from: now.format(DATE_FORMAT).to_string(),
        to: start.format(DATE_FORMAT).to_string(),
    }
}

impl DateInterval {
    /// 只讀一次時鐘，避免 `from`/`to` 跨日時不一致
    pub fn trailing(day_count: f64, clock: &dyn Clock) -> Self {
        compute_interval(day_count, clock.now())
    }
}
