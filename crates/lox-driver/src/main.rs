use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match lox_driver::Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(lox_util::ExitStatus::Usage.code() as u8);
        }
    };

    let status = lox_driver::run(&config);
    ExitCode::from(status.code() as u8)
}
