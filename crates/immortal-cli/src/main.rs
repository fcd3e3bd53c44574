fn main() -> anyhow::Result<()> {
    env_logger::init();
    immortal_cli::parse_cli()
}
