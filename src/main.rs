mod demos;

use anyhow::bail;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scenario = std::env::args().nth(1);
    match scenario.as_deref() {
        None => {
            for (name, run) in demos::SCENARIOS {
                info!("running scenario {}", name);
                run();
            }
        }
        Some(name) => match demos::SCENARIOS.iter().find(|(n, _)| *n == name) {
            Some((_, run)) => run(),
            None => bail!("unknown scenario {:?}", name),
        },
    }
    Ok(())
}
