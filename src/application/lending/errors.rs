use thiserror::Error;

use crate::domain::{BookStateError, UnsupportedTier};

/// 貸出ワークフローのエラー
///
/// 貸出不可などの業務上の拒否はエラーではなく、結果型で返す。
#[derive(Debug, Error)]
pub enum LendingError {
    /// ISBNに該当する書籍がない
    #[error("Book not found with ISBN: {0}")]
    BookNotFound(String),

    /// メールアドレスに該当する会員がない
    #[error("Member not found with email: {0}")]
    MemberNotFound(String),

    /// 会員種別に対応する戦略が登録されていない
    #[error(transparent)]
    UnsupportedTier(#[from] UnsupportedTier),

    /// 書籍レコードの状態が不整合
    #[error("Inconsistent book record: {0}")]
    InconsistentBook(#[from] BookStateError),

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStore(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberStoreのエラー
    #[error("Member store error")]
    MemberStore(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 貸出ワークフローの Result型
pub type Result<T> = std::result::Result<T, LendingError>;
