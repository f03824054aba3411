use std::fs::File;

/// Initialize process-wide logging.
///
/// The prompt owns the tty, so log output must not land there: when the
/// `TERMLINE_LOG` environment variable names a file, logs are piped to
/// it. Without it the default stderr target is used, which is only
/// readable when stderr is redirected away from the terminal.
///
/// Filtering follows the usual `RUST_LOG` conventions, defaulting to
/// `info`.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);

    if let Ok(path) = std::env::var("TERMLINE_LOG") {
        match File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(err) => {
                eprintln!("termline: cannot open log file {path}: {err}");
            }
        }
    }

    // try_init so tests that initialize logging twice do not panic.
    let _ = builder.try_init();
}
