use crate::CLAP_STYLING;
use clap::arg;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("figtree")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("figtree")
        .styles(CLAP_STYLING)
        .about(
            "Fetches a Figma file's node tree, prints a per-node summary, and \
            writes an HTML stub of the first page's components.",
        )
        .arg(
            arg!(<FILE_KEY>)
                .required(true)
                .help("The file key from the Figma file URL"),
        )
        .arg(
            arg!([DEV_TOKEN])
                .required(false)
                .help("A Figma personal access token, sent as X-Figma-Token"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Where to write the component stub")
                .default_value("./ui.js"),
        )
        .arg(
            arg!(--"cache-dir" <PATH>)
                .required(false)
                .help("Directory for the raw response snapshot (wiped every run)")
                .default_value(".cache"),
        )
        .arg(
            arg!(-d --"dump" "Print the full raw response before the summary")
                .required(false)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"api-base" <URL>)
                .required(false)
                .help("Override the API base URL (testing against a local server)")
                .value_parser(clap::value_parser!(Url)),
        )
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
}
