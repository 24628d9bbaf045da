use clap::Parser;
use trafficlog::app::TrafficLogCliArguments;

fn main() {
    env_logger::init();
    let args = TrafficLogCliArguments::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running trafficlog: {e}");
            std::process::exit(1);
        }
    }
}
