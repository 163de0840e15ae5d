//! Errors raised by player directory implementations.
//!
//! Display strings are shown to the user as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KboError {
    #[error("검색 실패")]
    SearchRejected { status: u16 },

    #[error("서버 응답 오류 (HTTP {status})")]
    SyncRejected { status: u16 },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("응답을 해석할 수 없습니다: {0}")]
    InvalidResponse(String),

    #[error("잘못된 백엔드 주소: {0}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, KboError>;
