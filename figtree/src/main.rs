use clap;
use clap::error::ErrorKind;
use commands::command_argument_builder;
use figtree::handlers;
use figtree_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();

    let chosen_command = match cmd.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // Help and version keep clap's normal exit; anything else is
            // a usage error reported before any network or filesystem
            // work happens.
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    handlers::handle_fetch(&chosen_command).await;
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
