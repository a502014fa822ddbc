use crate::domain::Book;
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// BookStoreのインメモリ実装
///
/// 登録順を保持するため`Vec`で持つ。`save`はISBNが一致するレコードを置き換える。
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    /// 初期データ付きで作成
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let store = Self::new();
        for book in books {
            store.upsert(book);
        }
        store
    }

    fn upsert(&self, book: Book) {
        let mut books = self.books.lock().unwrap();
        match books.iter_mut().find(|b| b.isbn == book.isbn) {
            Some(existing) => *existing = book,
            None => books.push(book),
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        let books = self.books.lock().unwrap();
        Ok(books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn save(&self, book: Book) -> Result<()> {
        self.upsert(book);
        Ok(())
    }

    async fn all_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.lock().unwrap().clone())
    }
}
