use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};

use tickler_core::domain::{Importance, TaskDraft, TaskFilter};
use tickler_core::impls::{ConsoleNotifier, FileStorage, LogMailer};
use tickler_core::TaskAppBuilder;

#[tokio::main]
async fn main() {
    env_logger::init();

    // (A) capability を用意して app を構築
    //     データは TICKLER_DATA 配下（未指定ならカレント）に保存される
    let data_dir = std::env::var("TICKLER_DATA").unwrap_or_else(|_| ".".to_string());
    let mut app = TaskAppBuilder::new()
        .with_storage(Arc::new(FileStorage::new(&data_dir)))
        .with_notifier(Arc::new(ConsoleNotifier::new()))
        .with_mailer(Arc::new(LogMailer))
        .build()
        .expect("storage and notifier are wired above");

    // (B) 通知許可を取ってからスケジューラを起動（デモ用に 1 秒間隔）
    let permission = app.request_notification_permission();
    println!("notification permission: {permission:?}");
    let scheduler = app.start_scheduler(Duration::from_secs(1));

    // (C) タスク投入（一つはすぐ期限が来る）
    let soon = app
        .submit(TaskDraft {
            title: "stretch your legs".to_string(),
            description: "stand up and walk around".to_string(),
            importance: Importance::High,
            due_date: Some(Utc::now() + ChronoDuration::seconds(2)),
            notify_email: None,
        })
        .await
        .expect("draft is valid");
    println!("added {} (due in 2s)", soon.id);

    let later = app
        .submit(TaskDraft {
            title: "water the plants".to_string(),
            description: String::new(),
            importance: Importance::Low,
            due_date: Some(Utc::now() + ChronoDuration::hours(6)),
            notify_email: Some("user@example.com".to_string()),
        })
        .await
        .expect("draft is valid");
    println!("added {} (reminder email goes to the log)", later.id);

    // (D) フィルタごとの表示列
    for filter in [TaskFilter::All, TaskFilter::High] {
        app.set_filter(filter);
        println!("-- filter: {filter} --");
        for task in app.visible_tasks().await {
            println!(
                "  [{}] {} ({}, due {})",
                if task.completed { "x" } else { " " },
                task.title,
                task.importance,
                task.due_date.format("%Y-%m-%d %H:%M:%S"),
            );
        }
    }
    let counts = app.counts().await;
    println!("{} of {} tasks completed", counts.completed, counts.total);

    // (E) 期限到来の通知を待ってから graceful shutdown
    tokio::time::sleep(Duration::from_secs(3)).await;
    scheduler.shutdown_and_join().await;

    // 後片付け（デモなので投入したタスクは消しておく）
    app.toggle_complete(soon.id).await;
    app.delete(later.id).await;
    println!("done: {} task(s) left in the store", app.store().len().await);
}
