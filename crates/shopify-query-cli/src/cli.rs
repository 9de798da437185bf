use crate::render::RenderArgs;

#[derive(clap::Parser, Debug)]
#[command(name = "shopify-query", version, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub(crate) verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Render JSON query descriptions as GraphQL documents.
    Render(RenderArgs),
}
