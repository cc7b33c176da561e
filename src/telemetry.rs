use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

pub fn get_subscriber<Sink>(
    name: impl Into<String>,
    env_filter: impl Into<String>,
    sink: Sink,
) -> impl Subscriber + Sync + Send
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter.into()));
    let formatting_layer = BunyanFormattingLayer::new(name.into(), sink);
    Registry::default()
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .with(env_filter)
}

pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) -> Result<(), String> {
    LogTracer::init().map_err(|err| format!("Failed to initialize logger: {err}"))?;
    set_global_default(subscriber).map_err(|err| format!("Failed to set subscriber: {err}"))
}
