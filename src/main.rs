use std::process::ExitCode;

mod app;
mod config;
mod grid;
mod platform;
mod ui;

fn main() -> ExitCode {
    if let Err(err) = app::run() {
        eprintln!("sweeper error: {err}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
