use crate::domain::Book;
use crate::ports::BookStore;
use std::sync::Arc;
use thiserror::Error;

/// 書籍検索のエラー
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search type: {0}")]
    InvalidSearchType(String),

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStore(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 検索条件の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCriterion {
    /// タイトルの部分一致（大文字小文字無視）
    Title,
    /// 著者の完全一致
    Author,
    /// ISBNの完全一致（最大1件）
    Isbn,
}

impl std::str::FromStr for SearchCriterion {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SearchCriterion::Title),
            "author" => Ok(SearchCriterion::Author),
            "isbn" => Ok(SearchCriterion::Isbn),
            _ => Err(SearchError::InvalidSearchType(s.to_string())),
        }
    }
}

/// 書籍を検索する
///
/// 検索語は前後の空白を除去して使う。空白のみの検索語は空の結果を返す。
pub async fn search_books(
    book_store: &Arc<dyn BookStore>,
    criterion: SearchCriterion,
    term: &str,
) -> Result<Vec<Book>, SearchError> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }

    if criterion == SearchCriterion::Isbn {
        let book = book_store
            .find_by_isbn(term)
            .await
            .map_err(SearchError::BookStore)?;
        return Ok(book.into_iter().collect());
    }

    let books = book_store
        .all_books()
        .await
        .map_err(SearchError::BookStore)?;
    Ok(books
        .into_iter()
        .filter(|book| matches(book, criterion, term))
        .collect())
}

fn matches(book: &Book, criterion: SearchCriterion, term: &str) -> bool {
    match criterion {
        SearchCriterion::Title => book
            .title
            .as_deref()
            .is_some_and(|title| title.to_lowercase().contains(&term.to_lowercase())),
        SearchCriterion::Author => book.author.as_deref() == Some(term),
        SearchCriterion::Isbn => book.isbn == term,
    }
}
