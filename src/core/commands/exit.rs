use super::CommandStatus;

pub(super) fn run(args: &[&str]) -> CommandStatus {
    if args.len() > 1 {
        log::debug!("exit: ignoring {} argument(s)", args.len() - 1);
    }
    CommandStatus::Exit
}
