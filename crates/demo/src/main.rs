use anyhow::Context;

fn main() -> anyhow::Result<()> {
    menagerie_observability::init();

    tracing::info!("starting demonstration");

    let stdout = std::io::stdout().lock();
    let transcript = menagerie_demo::write_demo(stdout)
        .context("failed to write demo transcript to stdout")?;

    tracing::info!(lines = transcript.len(), "demonstration finished");
    Ok(())
}
