use clap::Parser;
use std::sync::Arc;

mod cli;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    let cfg = config::Config::load(&cli)?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, sizing the worker pool from config if set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr, cfg.server.backlog)?;

    logger::log_server_start(&listener.local_addr()?, &cfg);
    if !cfg.files.root_dir.is_dir() {
        logger::log_warning(&format!(
            "Root directory '{}' is not a readable directory, every request will get 404",
            cfg.files.root_dir.display()
        ));
    }

    server::start_server_loop(listener, Arc::new(cfg), server::shutdown_signal()).await;
    Ok(())
}
