//! MEMLOG - HTTP server entry point.
//! Serves a single in-memory record log on `HTTP_PLATFORM_PORT` (default 8080).

use env_logger::Env;

use memlog::config::ServerConfig;
use memlog::engine::concurrent::SharedLog;
use memlog::server::LogServer;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    log::info!("starting memlog with {:?}", config);

    let records = SharedLog::with_capacity(config.initial_capacity);
    if let Err(err) = LogServer::new(records, config).run().await {
        log::error!("server failed: {}", err);
        std::process::exit(1);
    }
}
