use crate::domain::Book;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストアポート
///
/// 書籍レコードの永続化を抽象化する。
/// 貸出ワークフローとレポートはこのポート経由でのみ書籍を読み書きする。
#[async_trait]
pub trait BookStore: Send + Sync {
    /// ISBNで書籍を検索する
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>>;

    /// 書籍を保存する（ISBNが既存なら上書き）
    async fn save(&self, book: Book) -> Result<()>;

    /// 全書籍のスナップショットを取得する
    ///
    /// 呼び出し時点の有限な一覧。順序は登録順で、レポートの安定ソートの基準になる。
    async fn all_books(&self) -> Result<Vec<Book>>;
}
