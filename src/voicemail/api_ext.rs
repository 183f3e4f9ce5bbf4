use crate::{
    api::Api,
    genesys::{PlatformCredentials, VoicemailMessage},
    object_store::ObjectStore,
    secrets_store::{SecretStage, SecretsStore},
    voicemail::VoicemailEvent,
};
use anyhow::{Context, bail};
use tracing::{debug, info};

/// Extension of the object key voicemail recordings are uploaded with.
const RECORDING_EXTENSION: &str = "webm";

/// API to export voicemail recordings from the platform queues to the object store.
pub struct VoicemailApi<'a, SS: SecretsStore, OS: ObjectStore> {
    api: &'a Api<SS, OS>,
}

impl<'a, SS: SecretsStore, OS: ObjectStore> VoicemailApi<'a, SS, OS> {
    /// Creates Voicemail API.
    pub fn new(api: &'a Api<SS, OS>) -> Self {
        Self { api }
    }

    /// Exports all voicemail messages left in the conversation the event refers to.
    pub async fn export(&self, event: &VoicemailEvent) -> anyhow::Result<()> {
        self.export_conversation_voicemails(
            &event.detail.event_body.conversation_id,
            &event.detail.event_body.queue_id,
        )
        .await
        .inspect_err(|err| event.log_context().log_failure(err))
    }

    async fn export_conversation_voicemails(
        &self,
        conversation_id: &str,
        queue_id: &str,
    ) -> anyhow::Result<()> {
        let config = &self.api.config.voicemail;
        let secret_id = config
            .secret_id
            .as_deref()
            .context("Secret with platform credentials isn't configured.")?;
        let bucket = config
            .bucket
            .as_deref()
            .context("Bucket for voicemail recordings isn't configured.")?;

        let credentials = PlatformCredentials::from_secret(
            &self
                .api
                .secrets
                .get_secret_value(secret_id, SecretStage::Current)
                .await?,
        )?;
        let access_token = credentials.access_token.as_str();

        if config.disconnect_callback {
            self.api
                .genesys()
                .disconnect_callback(access_token, conversation_id)
                .await?;
            info!(conversation.id = conversation_id, "Disconnected callback.");
        }

        let messages = self
            .find_conversation_messages(access_token, conversation_id, queue_id)
            .await?;
        if messages.is_empty() {
            bail!("No voicemail match was found for conversation {conversation_id}");
        }

        for message in messages {
            let media = self
                .api
                .genesys()
                .get_voicemail_message_media(access_token, &message.id)
                .await?;
            let recording = self.api.genesys().download_media(&media.media_file_uri).await?;

            let key = format!("{}.{RECORDING_EXTENSION}", message.id);
            let recording_size = recording.len();
            self.api
                .objects
                .put_object(bucket, &key, recording)
                .await
                .with_context(|| {
                    format!("Cannot upload voicemail recording ({key}) to bucket ({bucket}).")
                })?;
            info!(
                conversation.id = conversation_id,
                voicemail.id = %message.id,
                voicemail.size = recording_size,
                object.bucket = bucket,
                object.key = %key,
                "Uploaded voicemail recording."
            );

            if config.mark_read_after_upload {
                self.api
                    .genesys()
                    .mark_voicemail_message_read(access_token, &message.id)
                    .await?;
                debug!(voicemail.id = %message.id, "Marked voicemail as read.");
            }

            if config.delete_after_upload {
                self.api
                    .genesys()
                    .delete_voicemail_message(access_token, &message.id)
                    .await?;
                debug!(voicemail.id = %message.id, "Deleted voicemail.");
            }
        }

        Ok(())
    }

    /// Pages through all voicemail messages queued in the queue and keeps the ones left in the
    /// specified conversation.
    async fn find_conversation_messages(
        &self,
        access_token: &str,
        conversation_id: &str,
        queue_id: &str,
    ) -> anyhow::Result<Vec<VoicemailMessage>> {
        let page_size = self.api.config.voicemail.effective_page_size();

        let mut matched_messages = vec![];
        let mut page_number = 1;
        loop {
            let page = self
                .api
                .genesys()
                .get_queue_voicemail_messages(access_token, queue_id, page_number, page_size)
                .await?;
            debug!(
                queue.id = queue_id,
                page.number = page_number,
                page.size = page.entities.len(),
                "Fetched queue voicemail messages."
            );

            matched_messages.extend(
                page.entities
                    .into_iter()
                    .filter(|message| message.belongs_to(conversation_id)),
            );

            if page.next_uri.is_none() {
                break;
            }
            page_number += 1;
        }

        Ok(matched_messages)
    }
}

impl<SS: SecretsStore, OS: ObjectStore> Api<SS, OS> {
    /// Returns an API to export voicemail recordings.
    pub fn voicemail(&self) -> VoicemailApi<'_, SS, OS> {
        VoicemailApi::new(self)
    }
}
