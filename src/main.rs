use cshell::config::Config;
use cshell::launcher::SystemLauncher;
use cshell::shell::Shell;
use std::io;
use std::process;

fn main() {
    env_logger::init();
    let config: Config = argh::from_env();

    if let Err(err) = run(&config) {
        eprintln!("cshell: {err:#}");
        process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    log::debug!("starting with {config:?}");
    let mut shell = Shell::new(SystemLauncher, config);
    shell.repl(io::stdin().lock(), &mut io::stdout(), &mut io::stderr())?;

    Ok(())
}
