use crate::core::{ActivityRecord, MarkupExtractor};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

const DATE_ATTR: &str = "data-date";
const LEVEL_ATTR: &str = "data-level";

// 舊版版面：<svg class="js-calendar-graph-svg"> 內每週一個 <g>，每天一個 <rect>
static WEEK_GROUPS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".js-calendar-graph-svg g").expect("week group selector is valid")
});

// 新版版面：<table class="ContributionCalendar-grid"> 內每天一個 <td>
static TABLE_DAY_CELLS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table.ContributionCalendar-grid td.ContributionCalendar-day")
        .expect("table day cell selector is valid")
});

/// 從貢獻頁面的 HTML 中抽出每日格子
///
/// 只做結構上的擷取：屬性缺漏或格式錯誤都照原樣保留，
/// 找不到日曆圖時回傳空陣列。
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarGraphExtractor;

impl CalendarGraphExtractor {
    pub fn new() -> Self {
        Self
    }

    fn svg_day_cells(document: &Html) -> Vec<ActivityRecord> {
        document
            .select(&WEEK_GROUPS)
            .flat_map(|group| {
                group
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|child| child.value().name() == "rect")
            })
            .map(record_from_cell)
            .collect()
    }

    fn table_day_cells(document: &Html) -> Vec<ActivityRecord> {
        document
            .select(&TABLE_DAY_CELLS)
            .map(record_from_cell)
            .collect()
    }
}

impl MarkupExtractor for CalendarGraphExtractor {
    fn extract(&self, markup: &str) -> Vec<ActivityRecord> {
        let document = Html::parse_document(markup);

        let records = Self::svg_day_cells(&document);
        if !records.is_empty() {
            return records;
        }

        let records = Self::table_day_cells(&document);
        if records.is_empty() {
            tracing::debug!("No calendar graph found in markup ({} bytes)", markup.len());
        }
        records
    }
}

fn record_from_cell(cell: ElementRef<'_>) -> ActivityRecord {
    let element = cell.value();
    ActivityRecord {
        date: element.attr(DATE_ATTR).map(str::to_owned),
        value: element.attr(LEVEL_ATTR).map(str::to_owned),
    }
}
