//! tickler-core
//!
//! Core building blocks for the Tickler task reminder.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, importance, draft, filter, errors）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, KeyValueStorage, Notifier, Mailer）
//! - **impls**: 実装（FileStorage, InMemoryStorage, ConsoleNotifier, LogMailer）
//! - **store**: タスク列の正本（structural replacement + best-effort persistence）
//! - **persist**: 永続化コーデック（JSON / RFC 3339 due_date）
//! - **scheduler**: 通知スケジューラ（60 秒間隔のポーリング、watch による停止）
//! - **view**: フィルタ・ソートの純粋な射影
//! - **app**: アプリケーションの構築とワイヤリング（builder）

pub mod app;
pub mod domain;
pub mod impls;
pub mod persist;
pub mod ports;
pub mod scheduler;
pub mod store;
pub mod view;

pub use app::{BuildError, TaskApp, TaskAppBuilder};
pub use domain::{Importance, Task, TaskDraft, TaskFilter, TaskId, ValidationError};
pub use scheduler::NotificationScheduler;
pub use store::TaskStore;
