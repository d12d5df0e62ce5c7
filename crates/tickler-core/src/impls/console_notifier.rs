//! Console notifier implementation.

use std::sync::Mutex;

use crate::ports::{NotificationContent, Notifier, NotifyPermission};

/// ConsoleNotifier は stderr に通知を出す端末向けアダプタ
///
/// ブラウザ通知の自動クローズやクリックフォーカスに相当するものは
/// 端末には無いため、表示のみを行う。許可状態はこのアダプタが所有し、
/// Denied になったら request_permission でも再度尋ねない。
pub struct ConsoleNotifier {
    permission: Mutex<NotifyPermission>,
}

impl ConsoleNotifier {
    /// 未確認状態で開始（request_permission で Granted になる）
    pub fn new() -> Self {
        Self {
            permission: Mutex::new(NotifyPermission::Undetermined),
        }
    }

    /// 通知を無効化した運用向け
    pub fn denied() -> Self {
        Self {
            permission: Mutex::new(NotifyPermission::Denied),
        }
    }

    fn permission_state(&self) -> NotifyPermission {
        self.permission
            .lock()
            .map(|p| *p)
            .unwrap_or(NotifyPermission::Denied)
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn permission(&self) -> NotifyPermission {
        self.permission_state()
    }

    fn request_permission(&self) -> NotifyPermission {
        let Ok(mut permission) = self.permission.lock() else {
            return NotifyPermission::Denied;
        };
        if *permission == NotifyPermission::Denied {
            // 一度 Denied になったらユーザーに badger しない
            return NotifyPermission::Denied;
        }
        *permission = NotifyPermission::Granted;
        NotifyPermission::Granted
    }

    fn show(&self, content: &NotificationContent) {
        eprintln!("🔔 {}", content.title);
        for line in content.body.lines() {
            eprintln!("   {line}");
        }
    }
}
