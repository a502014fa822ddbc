use crate::application::{lending::LendingError, report::ReportError, search::SearchError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// 業務上の拒否はエラーではないため、ここには現れない（200で結果を返す）。
#[derive(Debug)]
pub enum ApiError {
    Lending(LendingError),
    Report(ReportError),
    Search(SearchError),
}

impl From<LendingError> for ApiError {
    fn from(err: LendingError) -> Self {
        ApiError::Lending(err)
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        ApiError::Report(err)
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        ApiError::Search(err)
    }
}

/// 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
fn internal(
    error_type: &'static str,
    err: &dyn std::error::Error,
) -> (StatusCode, &'static str, String) {
    tracing::error!(error = ?err, "{}", error_type);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_type,
        "An unexpected error occurred".to_string(),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            // 404 Not Found - 識別子に該当するレコードがない
            ApiError::Lending(e @ LendingError::BookNotFound(_)) => {
                (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", e.to_string())
            }
            ApiError::Lending(e @ LendingError::MemberNotFound(_)) => {
                (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND", e.to_string())
            }

            // 400 Bad Request - 不正なパラメータ
            ApiError::Report(e @ ReportError::UnknownReportKind(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_REPORT_KIND", e.to_string())
            }
            ApiError::Search(e @ SearchError::InvalidSearchType(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_SEARCH_TYPE", e.to_string())
            }

            // 500 Internal Server Error - 設定・データ不整合・ストア障害
            ApiError::Lending(e @ LendingError::UnsupportedTier(_)) => {
                internal("UNSUPPORTED_TIER", e)
            }
            ApiError::Lending(e @ LendingError::InconsistentBook(_)) => {
                internal("INCONSISTENT_BOOK", e)
            }
            ApiError::Lending(e @ LendingError::BookStore(_))
            | ApiError::Lending(e @ LendingError::MemberStore(_)) => internal("STORE_ERROR", e),
            ApiError::Report(e @ ReportError::BookStore(_)) => internal("STORE_ERROR", e),
            ApiError::Search(e @ SearchError::BookStore(_)) => internal("STORE_ERROR", e),
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
