use chrono::NaiveDate;

/// 「今日」の供給源
///
/// テストでは固定日付を注入して決定的にする。
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
