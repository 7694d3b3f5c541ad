fn main() -> anyhow::Result<()> {
    worklog::cli::run()
}
