mod handler_kind;

pub use self::handler_kind::HandlerKind;
use crate::{
    api::Api,
    config::Config,
    network::Network,
    object_store::{ObjectStore, S3ObjectStore},
    rotation::RotationRequest,
    secrets_store::{AwsSecretsStore, SecretsStore},
    voicemail::VoicemailEvent,
};
use anyhow::{Context, anyhow};
use lambda_runtime::{LambdaEvent, service_fn};
use std::{path::Path, sync::Arc};
use tracing::info;

/// Builds clients once per process and either serves invocations from the Lambda runtime or
/// handles a single event read from the file.
#[tokio::main]
pub async fn run(
    config: Config,
    handler: HandlerKind,
    event_path: Option<&Path>,
) -> anyhow::Result<()> {
    let sdk_config = config.aws.load_sdk_config().await;
    let network = Network::create(&config.http.client)?;
    let api = Arc::new(Api::new(
        config,
        network,
        AwsSecretsStore::new(&sdk_config),
        S3ObjectStore::new(&sdk_config),
    ));

    if let Some(event_path) = event_path {
        info!(
            handler = %handler,
            event.path = %event_path.display(),
            "Handling a single event from file."
        );
        let event = std::fs::read_to_string(event_path)
            .with_context(|| format!("Cannot read event file ({}).", event_path.display()))?;
        return handle_event(
            api.as_ref(),
            handler,
            serde_json::from_str(&event).with_context(|| {
                format!("Cannot parse event file ({}).", event_path.display())
            })?,
        )
        .await;
    }

    info!(handler = %handler, "Starting Lambda runtime.");
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<serde_json::Value>| {
            let api = api.clone();
            async move {
                handle_event(api.as_ref(), handler, event.payload)
                    .await
                    .map_err(lambda_runtime::Error::from)
            }
        },
    ))
    .await
    .map_err(|err| anyhow!("Lambda runtime failed: {err}"))
}

/// Deserializes the event payload for the handler and dispatches it.
pub async fn handle_event<SS: SecretsStore, OS: ObjectStore>(
    api: &Api<SS, OS>,
    handler: HandlerKind,
    payload: serde_json::Value,
) -> anyhow::Result<()> {
    match handler {
        HandlerKind::RotateSecret => {
            let request = serde_json::from_value::<RotationRequest>(payload)
                .context("Cannot parse secret rotation request.")?;
            api.rotation().handle(&request).await
        }
        HandlerKind::ExportVoicemail => {
            let event = serde_json::from_value::<VoicemailEvent>(payload)
                .context("Cannot parse voicemail event.")?;
            api.voicemail().export(&event).await
        }
    }
}
