mod cli;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    if args.len() > 1 && args[1] == "--header" {
        // Print the kernel constants so they can be prepended to the kernel source
        print!("{}", mirrorbox::constants::kernel_header());
        Ok(())
    } else {
        cli::run_cli_session()
    }
}
