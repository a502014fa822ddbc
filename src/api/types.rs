use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Book;

/// 貸出リクエスト（POST /checkouts）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutRequest {
    pub isbn: String,
    pub member_email: String,
}

/// 返却リクエスト（POST /returns）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReturnRequest {
    pub isbn: String,
}

/// 書籍検索のクエリパラメータ（GET /books/search）
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// title / author / isbn
    pub by: String,
    /// 検索語
    pub q: String,
}

/// 書籍レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub isbn: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub checked_out_by: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn,
            title: book.title,
            author: book.author,
            status: book.status.as_str().to_string(),
            due_date: book.due_date,
            checked_out_by: book.checked_out_by,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
