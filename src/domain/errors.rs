use thiserror::Error;

/// 会員種別に対応する戦略が存在しない
///
/// 未知の種別文字列のパース失敗と、リゾルバに未登録の種別の両方で使われる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported membership tier: {0}")]
pub struct UnsupportedTier(pub String);

/// 書籍の状態遷移エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookStateError {
    /// 貸出可能状態ではない
    #[error("book {0} is not available")]
    NotAvailable(String),

    /// 貸出中ではない
    #[error("book {0} is not checked out")]
    NotCheckedOut(String),

    /// 貸出中なのに借り手が記録されていない
    #[error("book {0} is checked out without a borrower")]
    MissingBorrower(String),

    /// 貸出中なのに返却期限が記録されていない
    #[error("book {0} is checked out without a due date")]
    MissingDueDate(String),

    /// 貸出可能なのに借り手または返却期限が残っている
    #[error("book {0} is available but still has a borrower or due date")]
    StaleLoanFields(String),
}
