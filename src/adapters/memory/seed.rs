use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::{BookStore, MemberStore};
use crate::domain::{Book, BookStateError, Member, MembershipTier, UnsupportedTier};

/// 初期データ読み込みのエラー
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),

    #[error("malformed seed file")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnsupportedTier(#[from] UnsupportedTier),

    #[error(transparent)]
    InconsistentBook(#[from] BookStateError),
}

#[derive(Debug, Deserialize)]
struct MemberRecord {
    email: String,
    name: String,
    tier: String,
    #[serde(default)]
    books_checked_out: u32,
}

/// インメモリストアの初期データ（JSON）
///
/// ```json
/// {
///   "books": [{ "isbn": "978-0-13-235088-4", "title": "Clean Code", "author": "Robert Martin" }],
///   "members": [{ "email": "john@example.com", "name": "John Doe", "tier": "REGULAR" }]
/// }
/// ```
#[derive(Debug, Default)]
pub struct LibrarySeed {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
}

impl LibrarySeed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            books: Vec<Book>,
            #[serde(default)]
            members: Vec<MemberRecord>,
        }

        let raw: Raw = serde_json::from_str(json)?;

        for book in &raw.books {
            validate_book(book)?;
        }

        let members = raw
            .members
            .into_iter()
            .map(|record| -> Result<Member, SeedError> {
                let tier: MembershipTier = record.tier.parse()?;
                Ok(Member {
                    email: record.email,
                    name: record.name,
                    tier,
                    books_checked_out: record.books_checked_out,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            books: raw.books,
            members,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// ストアを構築する
    pub fn into_stores(self) -> (BookStore, MemberStore) {
        tracing::info!(
            books = self.books.len(),
            members = self.members.len(),
            "seeding in-memory stores"
        );
        (
            BookStore::with_books(self.books),
            MemberStore::with_members(self.members),
        )
    }
}

/// 貸出状態と貸出フィールドの対応を検証する
fn validate_book(book: &Book) -> Result<(), BookStateError> {
    if book.is_checked_out() {
        book.current_loan()?;
    } else if book.due_date.is_some() || book.checked_out_by.is_some() {
        return Err(BookStateError::StaleLoanFields(book.isbn.clone()));
    }
    Ok(())
}
