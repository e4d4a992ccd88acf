//! Interactive password strength analyzer.

fn main() -> anyhow::Result<()> {
    pwd_analyzer::logging::init_file_logging()?;
    pwd_analyzer::gui::run()
}
