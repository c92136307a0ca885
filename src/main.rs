// Liberate - Switch Android devices from USB to wireless adb
use liberate::cli::{execute_command, report_error, Args, ConsoleWriter};

#[tokio::main]
async fn main() {
    let (args, action) = match Args::try_parse_action_from(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) => e.exit(),
    };

    if let Err(e) = execute_command(&args, action).await {
        let writer = ConsoleWriter::new(args.output);
        if report_error(&writer, &e).is_err() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}
