//! a compact host monitor.

use {
    std::io,
    sysmon::{
        App,
        cli::{Options, USAGE},
    },
    tracing::Level,
};

type Error = Box<dyn std::error::Error>;

fn main() -> Result<(), Error> {
    // diagnostics go to stderr, leaving stdout to the report.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(error) => {
            println!("{error}\n{USAGE}");
            return Ok(());
        }
    };

    App::new(options).run(io::stdout().lock())?;

    Ok(())
}
