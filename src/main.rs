use std::ffi::OsString;

use bazelisk::config::Config;

fn main() -> anyhow::Result<()> {
    bazelisk::logging::init();

    let config = Config::from_env()?;
    let cwd = std::env::current_dir()?;
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let code = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(bazelisk::run(&config, &cwd, args))?;

    std::process::exit(code)
}
