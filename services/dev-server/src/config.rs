//! サーバー設定
//!
//! ポートと配信ディレクトリは固定。コマンドラインからはキャッシュ無効化のみ切り替えられる。

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// リッスンポート
pub const PORT: u16 = 8080;

/// 配信ディレクトリ（カレントディレクトリ）
pub const ROOT_DIR: &str = ".";

/// コマンドライン引数
#[derive(Debug, Parser)]
#[command(name = "dev-server", about = "SPA開発用の静的ファイルサーバー")]
pub struct Args {
    /// すべてのレスポンスにキャッシュ無効化ヘッダーを付与する
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 配信ディレクトリ
    pub root_dir: PathBuf,
    /// リッスンポート
    pub port: u16,
    /// キャッシュ無効化ヘッダーを付与するか
    pub disable_caching: bool,
}

impl ServerConfig {
    /// 固定のポートと配信ディレクトリで設定を作成
    pub fn new(disable_caching: bool) -> Self {
        Self {
            root_dir: PathBuf::from(ROOT_DIR),
            port: PORT,
            disable_caching,
        }
    }

    /// 全インターフェースでリッスンする
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self::new(args.no_cache)
    }
}
