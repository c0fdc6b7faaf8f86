use std::io::Write;

use kleene_tabbing::Derivation;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let derivation = Derivation::standard()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    derivation.write_document(&mut out)?;
    out.flush()?;
    Ok(())
}
