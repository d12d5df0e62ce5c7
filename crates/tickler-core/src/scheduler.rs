//! Notification scheduler - 期限到来タスクの one-shot 通知
//!
//! 60 秒間隔のポーリングで、未完了・未通知・期限到来のタスクに
//! 一度だけアラートを発火し、`notified` フラグを立てます。
//!
//! # タイマーの所有
//! - `spawn` が返すハンドルがタイマーを所有する
//! - `request_shutdown()` / `shutdown_and_join()` で決定的に停止する
//!   （view の dismount や通知無効化で、以後の発火は起きない）

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ports::{Clock, NotificationContent, Notifier, NotifyPermission};
use crate::store::TaskStore;

/// 本番のポーリング間隔（60 秒）
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(60);

/// Scheduler handle.
/// - `request_shutdown()` でポーリングが止まる
/// - `shutdown_and_join()` で停止完了を待てる
pub struct NotificationScheduler {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl NotificationScheduler {
    /// Spawn the polling loop.
    ///
    /// 最初の tick は即時（mount 時に一度チェック）、以後 `period` ごと。
    pub fn spawn(
        store: TaskStore,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        period: Duration,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let join = tokio::spawn(async move {
            poll_loop(store, notifier, clock, period, &mut shutdown_rx).await;
        });

        Self { shutdown_tx, join }
    }

    /// Request shutdown. No further checks run after this is observed.
    pub fn request_shutdown(&self) {
        // ignore send error: receiver may already be dropped
        let _ = self.shutdown_tx.send(true);
    }

    /// Shutdown and wait for the loop to exit.
    pub async fn shutdown_and_join(self) {
        self.request_shutdown();
        let _ = self.join.await;
    }
}

async fn poll_loop(
    store: TaskStore,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    period: Duration,
    shutdown_rx: &mut watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            _ = shutdown_rx.changed() => {
                // 変更が入ったら次のループで判定
                continue;
            }
            _ = ticker.tick() => {
                let fired = check_due_tasks(&store, notifier.as_ref(), clock.now()).await;
                if fired > 0 {
                    log::info!("fired {fired} task reminder(s)");
                }
            }
        }
    }
}

/// 一回分のチェック。発火した通知の数を返す。
///
/// # 状態機械（completed, notified ごと）
/// - 未完了・未通知・期限到来 → 発火して notified = true
/// - それ以外 → 何もしない
///
/// 再評価は冪等：notified 済みのタスクは二度と発火しない。
/// 許可が Granted でなければ（Denied / Undetermined）完全に沈黙する。
pub async fn check_due_tasks(
    store: &TaskStore,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> usize {
    if notifier.permission() != NotifyPermission::Granted {
        return 0;
    }

    let mut fired = 0;
    for task in store.tasks().await {
        if !task.is_alert_due(now) {
            continue;
        }
        notifier.show(&NotificationContent::for_task(&task));
        if store.mark_notified(task.id).await {
            fired += 1;
        }
    }
    fired
}
