//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部環境（永続ストア、通知表示、メール送信、時刻）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - コアロジック（filter/sort/notify 判定）は実環境なしでテストできる
//! - 通知許可はポートの所有物（コアは Granted かどうかを見るだけ）
//! - 永続化とメール送信は best-effort / fire-and-forget

pub mod clock;
pub mod id_generator;
pub mod mailer;
pub mod notifier;
pub mod storage;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::mailer::{MailError, Mailer, ReminderMail};
pub use self::notifier::{NotificationContent, Notifier, NotifyPermission};
pub use self::storage::{KeyValueStorage, StorageError};
