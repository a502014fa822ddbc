use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// 環境変数から読み込むサーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// インメモリストアの初期データ（書籍・会員）を持つJSONファイル
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// - LISTEN_ADDR: 省略時は"0.0.0.0:3000"
    /// - LIBRARY_SEED_FILE: 任意
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を構築する
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?;

        let seed_file = lookup("LIBRARY_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            listen_addr,
            seed_file,
        })
    }
}
