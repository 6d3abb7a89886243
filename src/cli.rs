use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Build a climbing pyramid from a Mountain Project tick export",
    long_about = None
)]
pub struct Cli {
    /// Route type to include, conventionally 'sport' or 'trad'
    #[arg(long = "type", value_name = "ROUTE_TYPE", default_value = "sport")]
    pub route_type: String,
}
