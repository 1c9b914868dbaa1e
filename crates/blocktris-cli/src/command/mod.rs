use clap::{Parser, Subcommand};

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in (defaults to `play`)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play interactively in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Play seeded games with a random player and write a JSON report
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or_else(|| Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let args = CommandArgs::try_parse_from(["blocktris"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_parse_simulate_with_seed() {
        let args = CommandArgs::try_parse_from([
            "blocktris",
            "simulate",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
            "--games",
            "3",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Simulate(_))));
    }

    #[test]
    fn test_reject_malformed_seed() {
        let result = CommandArgs::try_parse_from(["blocktris", "play", "--seed", "xyz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_zero_delay() {
        for flag in ["--max-delay-ms", "--min-delay-ms"] {
            let result = CommandArgs::try_parse_from(["blocktris", "play", flag, "0"]);
            assert!(result.is_err(), "{flag} 0 accepted");
        }
        let result = CommandArgs::try_parse_from(["blocktris", "play", "--min-delay-ms", "1"]);
        assert!(result.is_ok());
    }
}
