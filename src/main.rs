use personagen::configuration::get_configuration;
use personagen::generator::FakeProfileGenerator;
use personagen::store::ProfileStore;
use personagen::telemetry::{get_tracing_subscriber, init_tracing_subscriber};

fn main() -> anyhow::Result<()> {
    let subscriber = get_tracing_subscriber("personagen".into(), "info".into(), std::io::stdout);
    init_tracing_subscriber(subscriber);

    let configuration = get_configuration()?;
    let generator = FakeProfileGenerator::new(&configuration.generator);
    let store = ProfileStore::new(generator);

    println!("{}", store.snapshot().profile);
    Ok(())
}
