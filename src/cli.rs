use clap::{ArgAction, Parser};

#[derive(Parser)]
#[clap(version, about)]
pub struct Cli {
    #[clap(value_parser, help = "The source file, URL, or - for standard input")]
    pub input: String,

    #[clap(value_parser, help = "Names to look up; prints the whole catalog if omitted")]
    pub names: Vec<String>,

    #[clap(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
    pub allow_dtd: bool,

    #[clap(long, help = "Maximum number of XML nodes in the input")]
    pub nodes_limit: Option<u32>,

    #[clap(short, long, action = ArgAction::Count, help = "Log diagnostics to stderr (repeat for more)")]
    pub verbose: u8,
}
