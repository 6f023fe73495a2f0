use once_cell::sync::Lazy;
use personagen::configuration::get_configuration;
use personagen::generator::FakeProfileGenerator;
use personagen::store::ProfileStore;
use personagen::telemetry::{get_tracing_subscriber, init_tracing_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            get_tracing_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_tracing_subscriber(subscriber);
    } else {
        let subscriber =
            get_tracing_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_tracing_subscriber(subscriber);
    }
});

pub fn spawn_store() -> ProfileStore<FakeProfileGenerator> {
    Lazy::force(&TRACING);

    let configuration = get_configuration().expect("Failed to read configuration");
    ProfileStore::new(FakeProfileGenerator::new(&configuration.generator))
}
