use crate::config::FcmConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FcmMessage<'a> {
    registration_ids: &'a [String],
    notification: FcmNotification<'a>,
}

#[derive(Debug, Serialize)]
struct FcmNotification<'a> {
    title: &'a str,
    body: &'a str,
}

/// FCM 推送。一次最多 1000 个 token，超过时分批发送。
const FCM_BATCH_SIZE: usize = 1000;

#[derive(Clone)]
pub struct FcmService {
    client: Client,
    config: FcmConfig,
}

impl FcmService {
    pub fn new(config: FcmConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// 未配置 server_key 时降级为仅记录日志，不视为错误
    pub async fn send_push(
        &self,
        device_tokens: &[String],
        title: &str,
        body: &str,
    ) -> AppResult<()> {
        if device_tokens.is_empty() {
            return Ok(());
        }
        if self.config.server_key.is_empty() {
            log::info!(
                "FCM not configured, skipping push to {} devices: {title}",
                device_tokens.len()
            );
            return Ok(());
        }

        let url = format!("{}/fcm/send", self.config.base_url);

        for chunk in device_tokens.chunks(FCM_BATCH_SIZE) {
            let message = FcmMessage {
                registration_ids: chunk,
                notification: FcmNotification { title, body },
            };

            let response = self
                .client
                .post(&url)
                .header(
                    "Authorization",
                    format!("key={}", self.config.server_key),
                )
                .json(&message)
                .send()
                .await?;

            if !response.status().is_success() {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                log::error!("FCM push failed: {error_text}");
                return Err(AppError::ExternalApiError(format!(
                    "Push sending failed: {error_text}"
                )));
            }
        }

        log::info!("Push sent to {} devices: {title}", device_tokens.len());
        Ok(())
    }
}
