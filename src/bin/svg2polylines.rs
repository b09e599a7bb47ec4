use svg2polylines::Result;

use svg2polylines::cli::{get_config, run};

fn main() -> Result<()> {
    env_logger::init();

    run(get_config()?)?;

    Ok(())
}
