fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 1. Parse commandline arguments to get the target
    let rotation_target = match trackrot::handle_cli_args(trackrot::args::parse_cli_args()) {
        Ok(rotation_target) => rotation_target,
        Err(err) => {
            eprintln!("CLI ERROR!");
            eprintln!("{}", err);
            std::process::exit(1);
        },
    };

    // 2. Rotate the mesh
    if let Err(err) = trackrot::run_process(&rotation_target) {
        eprintln!("PROCESS ERROR!");
        eprintln!("{}", err);
        std::process::exit(1);
    };
}
