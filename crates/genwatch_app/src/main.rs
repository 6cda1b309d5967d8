mod app;
mod effects;
mod logging;
mod ui;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GENWATCH_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    app::run_app(base_url)
}
