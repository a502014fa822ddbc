use chrono::NaiveDate;
use serde::Serialize;

/// 業務ルールによる拒否理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    /// 書籍が貸出可能状態でない
    BookNotAvailable,
    /// 会員が貸出上限に達している
    CheckoutLimitReached,
    /// 書籍が貸出中でない
    BookNotCheckedOut,
}

impl DeclineReason {
    /// 利用者向けメッセージ
    pub fn message(&self) -> &'static str {
        match self {
            DeclineReason::BookNotAvailable => "Book is not available",
            DeclineReason::CheckoutLimitReached => "Member has reached checkout limit",
            DeclineReason::BookNotCheckedOut => "Book is not checked out",
        }
    }
}

/// 貸出の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl CheckoutResult {
    pub fn checked_out(due_date: NaiveDate) -> Self {
        Self {
            success: true,
            message: format!("Book checked out successfully. Due date: {due_date}"),
            due_date: Some(due_date),
        }
    }

    pub fn declined(reason: DeclineReason) -> Self {
        Self {
            success: false,
            message: reason.message().to_string(),
            due_date: None,
        }
    }
}

/// 返却の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_fee: Option<f64>,
}

impl ReturnResult {
    /// 延滞料金が正ならメッセージに2桁小数で含める
    pub fn returned(late_fee: f64) -> Self {
        let message = if late_fee > 0.0 {
            format!("Book returned. Late fee: ${late_fee:.2}")
        } else {
            "Book returned successfully".to_string()
        };
        Self {
            success: true,
            message,
            late_fee: Some(late_fee),
        }
    }

    pub fn declined(reason: DeclineReason) -> Self {
        Self {
            success: false,
            message: reason.message().to_string(),
            late_fee: None,
        }
    }
}
