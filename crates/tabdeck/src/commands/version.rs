use colored::Colorize;

pub fn version_line() -> String {
    format!("tabdeck {}", env!("CARGO_PKG_VERSION"))
}

pub fn run() {
    println!("{}", version_line().bold());
    println!("{}", env!("CARGO_PKG_DESCRIPTION").dimmed());
}
