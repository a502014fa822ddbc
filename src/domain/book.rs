use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookStatus, BookStateError};

/// 書籍 - ISBNで一意に識別される蔵書1冊
///
/// 不変条件：
/// - `status == CheckedOut` ⇔ `due_date` と `checked_out_by` が両方設定されている
/// - `status == Available` ⇔ 両方とも未設定
///
/// 状態の変更は `check_out` / `mark_returned` でのみ行う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default = "default_status")]
    pub status: BookStatus,
    #[serde(default)]
    pub checked_out_by: Option<String>,
}

fn default_status() -> BookStatus {
    BookStatus::Available
}

impl Book {
    /// 貸出可能な書籍を作成する
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: Some(title.into()),
            author: Some(author.into()),
            due_date: None,
            status: BookStatus::Available,
            checked_out_by: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    pub fn is_checked_out(&self) -> bool {
        self.status == BookStatus::CheckedOut
    }

    /// 書籍を貸し出す
    ///
    /// # エラー
    /// 貸出可能状態でない場合は`BookStateError::NotAvailable`
    pub fn check_out(
        &mut self,
        borrower: impl Into<String>,
        due_date: NaiveDate,
    ) -> Result<(), BookStateError> {
        if !self.is_available() {
            return Err(BookStateError::NotAvailable(self.isbn.clone()));
        }
        self.status = BookStatus::CheckedOut;
        self.due_date = Some(due_date);
        self.checked_out_by = Some(borrower.into());
        Ok(())
    }

    /// 書籍を返却済みにする
    ///
    /// # エラー
    /// 貸出中でない場合は`BookStateError::NotCheckedOut`
    pub fn mark_returned(&mut self) -> Result<(), BookStateError> {
        if !self.is_checked_out() {
            return Err(BookStateError::NotCheckedOut(self.isbn.clone()));
        }
        self.status = BookStatus::Available;
        self.due_date = None;
        self.checked_out_by = None;
        Ok(())
    }

    /// 現在の貸出（借り手, 返却期限）を取得する
    ///
    /// 貸出中のレコードに借り手か返却期限が欠けている場合は不整合としてエラーを返す。
    pub fn current_loan(&self) -> Result<(&str, NaiveDate), BookStateError> {
        if !self.is_checked_out() {
            return Err(BookStateError::NotCheckedOut(self.isbn.clone()));
        }
        let borrower = self
            .checked_out_by
            .as_deref()
            .ok_or_else(|| BookStateError::MissingBorrower(self.isbn.clone()))?;
        let due_date = self
            .due_date
            .ok_or_else(|| BookStateError::MissingDueDate(self.isbn.clone()))?;
        Ok((borrower, due_date))
    }

    /// 指定日時点で延滞しているか（返却期限が当日より前）
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_checked_out() && self.due_date.is_some_and(|due| due < today)
    }
}
