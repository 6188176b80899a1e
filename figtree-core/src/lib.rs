pub mod cache;
pub mod document;
pub mod report;
pub mod run;
pub mod summary;
pub mod walk;

use colored::Colorize;

pub fn print_banner() {
    println!("{}", "═".repeat(60).bright_blue().bold());
    println!(
        "{}",
        "  FIGTREE - design file tree inspector".bright_white().bold()
    );
    println!(
        "{}",
        format!(
            "  v{}  https://github.com/trapdoorsec/figtree",
            env!("CARGO_PKG_VERSION")
        )
        .dimmed()
    );
    println!("{}", "═".repeat(60).bright_blue().bold());
    println!();
}
