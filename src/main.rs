use clap::Parser;

mod commands;
mod output;

use commands::run;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "step-runner")]
#[command(version = VERSION)]
#[command(about = "Run a named shell command as a CI step and report the outcome")]
struct Cli {
    #[command(flatten)]
    run: run::RunArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let json = cli.run.json;

    let outcome = run::run(cli.run);

    if json {
        if let Err(err) = output::print_outcome(&outcome) {
            eprintln!("{}", err);
            return std::process::ExitCode::from(1);
        }
    }

    std::process::ExitCode::from(exit_code_to_u8(output::exit_code_for_outcome(&outcome)))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "step-runner",
            "--step-name",
            "build",
            "--command",
            "-n is passed through",
            "--json",
        ]);
        assert_eq!(cli.run.step_name.as_deref(), Some("build"));
        assert_eq!(cli.run.command.as_deref(), Some("-n is passed through"));
        assert!(cli.run.json);
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::parse_from(["step-runner"]);
        assert!(cli.run.step_name.is_none());
        assert!(cli.run.command.is_none());
    }

    #[test]
    fn exit_code_is_clamped() {
        assert_eq!(exit_code_to_u8(-1), 0);
        assert_eq!(exit_code_to_u8(20), 20);
        assert_eq!(exit_code_to_u8(300), 255);
    }
}
