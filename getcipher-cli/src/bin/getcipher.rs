use anyhow::Result;

fn main() -> Result<()> {
    getcipher_cli::cli::run()
}
