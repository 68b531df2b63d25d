use std::io::Write;

use tracing::debug;

use cookie_peek::config::Config;
use cookie_peek::cookie::CookieJar;
use cookie_peek::report::Report;
use cookie_peek::{logging, VERSION};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    // Initialize logging
    logging::init(&config.logging);

    debug!("cookie_peek {}", VERSION);
    config.log_summary();

    let source = config.source.resolve();
    let raw = source.read()?;

    let jar = CookieJar::parse(&raw);
    debug!("parsed {} cookie name(s)", jar.len());

    let report = Report::build(&jar, &config.report.keys);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out, &config.report)?;
    out.flush()?;

    Ok(())
}
