use bitseq::config::Config;
use bitseq::logger::configure_logger;
use bitseq::output::run;

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    configure_logger(config.log_level);
    log::info!("generator initialized; size = {}", config.sequence_size);

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    let mut rng = rand::thread_rng();
    run(&config, &mut writer, &mut rng)?;
    Ok(())
}
