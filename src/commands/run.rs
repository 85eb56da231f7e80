use clap::Args;
use step_runner::inputs::{self, EnvInputs, Inputs};
use step_runner::report::ConsoleLog;
use step_runner::runner;
use step_runner::shell::HostShell;
use step_runner::StepOutcome;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Human-readable step label (falls back to INPUT_STEP_NAME)
    #[arg(long, value_name = "NAME")]
    pub step_name: Option<String>,

    /// Shell command line to execute (falls back to INPUT_COMMAND)
    #[arg(long, value_name = "CMD", allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Print a JSON summary of the step after its log lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RunArgs) -> StepOutcome {
    let env = EnvInputs;
    let resolved = Inputs::new(&env)
        .with_override(inputs::STEP_NAME, args.step_name)
        .with_override(inputs::COMMAND, args.command);

    runner::run(&resolved, &HostShell, &mut ConsoleLog)
}
