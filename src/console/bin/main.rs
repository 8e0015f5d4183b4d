use std::io;
use lms::console::run;
use lms::core::controller::Console;
use lms::core::domain::Configuration;
use lms::factory::create_library_manager;
use lms::gateway::GatewayPublisherVia;
use lms::utils::logging::setup_tracing;

fn main() -> io::Result<()> {
    let config = Configuration::new("main");
    setup_tracing(&config);

    let mut manager = create_library_manager(&config, GatewayPublisherVia::Logs);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run(&mut manager, &mut console)
}
