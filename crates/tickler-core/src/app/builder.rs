//! TaskAppBuilder - アプリケーションの構築とワイヤリング
//!
//! グローバルだった UI 状態（タスク列、フィルタ）を、トップレベルの
//! コントローラ `TaskApp` が明示的に所有します。capability（ストレージ、
//! 通知、メール、時刻）はポート経由で注入します。
//!
//! # Fail-fast 設計
//! - build() 時に必須のポート（storage, notifier）が揃っているかチェック
//! - 不足があれば BuildError を返す

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Task, TaskDraft, TaskFilter, TaskId, ValidationError};
use crate::persist::TASKS_STORAGE_KEY;
use crate::ports::{
    Clock, IdGenerator, KeyValueStorage, Mailer, Notifier, NotifyPermission, ReminderMail,
    SystemClock, UlidGenerator,
};
use crate::scheduler::NotificationScheduler;
use crate::store::TaskStore;
use crate::view;

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no key-value storage configured. Call with_storage() before build().")]
    MissingStorage,

    #[error("no notifier configured. Call with_notifier() before build().")]
    MissingNotifier,
}

/// TaskAppBuilder は TaskApp を構築
///
/// # 使用例
/// ```ignore
/// let app = TaskAppBuilder::new()
///     .with_storage(Arc::new(FileStorage::new(data_dir)))
///     .with_notifier(Arc::new(ConsoleNotifier::new()))
///     .with_mailer(Arc::new(LogMailer))
///     .build()?;
/// ```
pub struct TaskAppBuilder {
    storage: Option<Arc<dyn KeyValueStorage>>,
    storage_key: String,
    clock: Arc<dyn Clock>,
    ids: Option<Arc<dyn IdGenerator>>,
    notifier: Option<Arc<dyn Notifier>>,
    mailer: Option<Arc<dyn Mailer>>,
}

impl TaskAppBuilder {
    pub fn new() -> Self {
        Self {
            storage: None,
            storage_key: TASKS_STORAGE_KEY.to_string(),
            clock: Arc::new(SystemClock),
            ids: None,
            notifier: None,
            mailer: None,
        }
    }

    pub fn with_storage(mut self, storage: Arc<dyn KeyValueStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// メールは任意。未設定ならリマインダーメールは送られない。
    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// TaskApp を構築（保存済みタスクの読み込みもここで行う）
    pub fn build(self) -> Result<TaskApp, BuildError> {
        let storage = self.storage.ok_or(BuildError::MissingStorage)?;
        let notifier = self.notifier.ok_or(BuildError::MissingNotifier)?;
        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(Arc::clone(&self.clock))));

        let store = TaskStore::open(storage, self.storage_key);

        Ok(TaskApp {
            store,
            clock: self.clock,
            ids,
            notifier,
            mailer: self.mailer,
            filter: TaskFilter::default(),
        })
    }
}

impl Default for TaskAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// TaskApp はトップレベルのコントローラ
///
/// タスク列の正本（store）と、現在のフィルタを所有する。
/// ユーザー操作（submit / toggle / delete / filter 変更）はすべて
/// ここを経由する。
pub struct TaskApp {
    store: TaskStore,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    notifier: Arc<dyn Notifier>,
    mailer: Option<Arc<dyn Mailer>>,
    filter: TaskFilter,
}

impl TaskApp {
    /// store の共有ハンドル（スケジューラなどへ渡す用）
    pub fn store(&self) -> TaskStore {
        self.store.clone()
    }

    /// Submit a draft: validate, mint an id, append, and (optionally)
    /// fire off the reminder email.
    ///
    /// # 契約
    /// - 検証に失敗したら何も作られない
    /// - メール送信は fire-and-forget：結果はログに出すだけで、
    ///   タスク作成の成否には影響しない
    pub async fn submit(&self, draft: TaskDraft) -> Result<Task, ValidationError> {
        let notify_email = draft.notify_email.clone();
        let task = draft.into_task(self.ids.generate_task_id(), self.clock.now())?;
        self.store.add(task.clone()).await;

        if let (Some(to), Some(mailer)) = (notify_email, self.mailer.clone()) {
            let mail = ReminderMail::new(to, task.title.clone());
            tokio::spawn(async move {
                match mailer.send(&mail).await {
                    Ok(()) => log::info!("reminder email sent to {}", mail.to),
                    Err(e) => log::error!("failed to send reminder email to {}: {e}", mail.to),
                }
            });
        }

        Ok(task)
    }

    pub async fn toggle_complete(&self, id: TaskId) -> bool {
        self.store.toggle_complete(id).await
    }

    pub async fn delete(&self, id: TaskId) -> bool {
        self.store.delete(id).await
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// 現在のフィルタでの表示列（filter → sort 済み）
    pub async fn visible_tasks(&self) -> Vec<Task> {
        view::project(&self.store.tasks().await, self.filter)
    }

    /// サマリ行向けの集計
    pub async fn counts(&self) -> view::TaskCounts {
        view::counts(&self.store.tasks().await)
    }

    /// 通知許可を要求する（Denied 済みなら黙って Denied が返る）
    pub fn request_notification_permission(&self) -> NotifyPermission {
        self.notifier.request_permission()
    }

    /// この app の store / notifier / clock でスケジューラを起動する
    pub fn start_scheduler(&self, period: Duration) -> NotificationScheduler {
        NotificationScheduler::spawn(
            self.store.clone(),
            Arc::clone(&self.notifier),
            Arc::clone(&self.clock),
            period,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Importance;
    use crate::impls::{ConsoleNotifier, InMemoryStorage};
    use crate::ports::{FixedClock, MailError};
    use async_trait::async_trait;
    use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
    use std::sync::Mutex as StdMutex;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn app() -> TaskApp {
        TaskAppBuilder::new()
            .with_storage(Arc::new(InMemoryStorage::new()))
            .with_notifier(Arc::new(ConsoleNotifier::new()))
            .with_clock(Arc::new(FixedClock::new(now())))
            .build()
            .unwrap()
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            importance: Importance::Medium,
            due_date: Some(now() + ChronoDuration::hours(1)),
            notify_email: None,
        }
    }

    #[test]
    fn build_fails_fast_without_storage() {
        let result = TaskAppBuilder::new()
            .with_notifier(Arc::new(ConsoleNotifier::new()))
            .build();
        assert!(matches!(result, Err(BuildError::MissingStorage)));
    }

    #[test]
    fn build_fails_fast_without_notifier() {
        let result = TaskAppBuilder::new()
            .with_storage(Arc::new(InMemoryStorage::new()))
            .build();
        assert!(matches!(result, Err(BuildError::MissingNotifier)));
    }

    #[tokio::test]
    async fn submit_grows_the_store_by_one() {
        let app = app();

        let task = app.submit(draft("pay rent")).await.unwrap();

        assert_eq!(app.store().len().await, 1);
        assert!(!task.completed);
        assert!(!task.notified);
    }

    #[tokio::test]
    async fn invalid_draft_creates_nothing() {
        let app = app();

        let result = app
            .submit(TaskDraft {
                title: "  ".to_string(),
                ..draft("ignored")
            })
            .await;

        assert_eq!(result, Err(ValidationError::EmptyTitle));
        assert!(app.store().is_empty().await);
    }

    #[tokio::test]
    async fn filter_changes_the_visible_projection() {
        let mut app = app();
        app.submit(TaskDraft {
            importance: Importance::High,
            ..draft("urgent")
        })
        .await
        .unwrap();
        app.submit(TaskDraft {
            importance: Importance::Low,
            ..draft("someday")
        })
        .await
        .unwrap();

        app.set_filter(TaskFilter::High);
        let visible = app.visible_tasks().await;

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "urgent");
    }

    /// テスト用: 送信先を記録する Mailer
    struct RecordingMailer {
        sent: StdMutex<Vec<ReminderMail>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, mail: &ReminderMail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(mail.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn submit_with_email_fires_a_reminder_mail() {
        let mailer = Arc::new(RecordingMailer {
            sent: StdMutex::new(Vec::new()),
        });
        let app = TaskAppBuilder::new()
            .with_storage(Arc::new(InMemoryStorage::new()))
            .with_notifier(Arc::new(ConsoleNotifier::new()))
            .with_clock(Arc::new(FixedClock::new(now())))
            .with_mailer(Arc::clone(&mailer) as Arc<dyn Mailer>)
            .build()
            .unwrap();

        app.submit(TaskDraft {
            notify_email: Some("user@example.com".to_string()),
            ..draft("call dentist")
        })
        .await
        .unwrap();

        // fire-and-forget の spawn が走るのを待つ
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "user@example.com");
        assert_eq!(sent[0].task_name, "call dentist");
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _mail: &ReminderMail) -> Result<(), MailError> {
            Err(MailError::Send("service unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn mail_failure_does_not_invalidate_the_task() {
        let app = TaskAppBuilder::new()
            .with_storage(Arc::new(InMemoryStorage::new()))
            .with_notifier(Arc::new(ConsoleNotifier::new()))
            .with_clock(Arc::new(FixedClock::new(now())))
            .with_mailer(Arc::new(FailingMailer))
            .build()
            .unwrap();

        let result = app
            .submit(TaskDraft {
                notify_email: Some("user@example.com".to_string()),
                ..draft("call dentist")
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(app.store().len().await, 1);
    }
}
