//! Adapter implementations for the ports.
//!
//! - **InMemoryStorage**: 開発・テスト用の key-value スロット
//! - **FileStorage**: キーごとに 1 ファイルの永続ストア
//! - **ConsoleNotifier**: 端末向けの通知表示
//! - **LogMailer**: 実送信しないメールアダプタ（ログのみ）

pub mod console_notifier;
pub mod file_storage;
pub mod inmem_storage;
pub mod log_mailer;

pub use self::console_notifier::ConsoleNotifier;
pub use self::file_storage::FileStorage;
pub use self::inmem_storage::InMemoryStorage;
pub use self::log_mailer::LogMailer;
