//! Log-only mailer implementation.

use async_trait::async_trait;

use crate::ports::{MailError, Mailer, ReminderMail};

/// LogMailer は実送信を行わないアダプタ
///
/// メール連携は外部サービスの責務なので、リポジトリ内の実装は
/// 送信内容をログに出すだけにしている。差し替えはポート側で行う。
#[derive(Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: &ReminderMail) -> Result<(), MailError> {
        log::info!(
            "mail[{}] to={} task={}: {}",
            mail.template,
            mail.to,
            mail.task_name,
            mail.notes
        );
        Ok(())
    }
}
