use anyhow::Result;
use rtf_extract::cli::run;

fn main() -> Result<()> {
    run()
}
