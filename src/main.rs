fn main() -> anyhow::Result<()> {
    tracing_log::LogTracer::init()?;

    let stdout_subscriber = tracing_subscriber::fmt().pretty().finish();
    tracing::subscriber::set_global_default(stdout_subscriber)?;

    orrery::report_layout(1280, 720)?;
    Ok(())
}
