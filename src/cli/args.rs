use clap::Parser;

/// Command-line arguments for cinematch
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cinematch")]
#[command(about = "A CLI tool for comparing two film-diary exports and listing what they share")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Both people as NAME ZIP NAME ZIP (name of person 1, their export, name of person 2, their export)
    #[arg(value_name = "NAME ZIP NAME ZIP")]
    pub people: Vec<String>,

    /// YAML file naming both people, used when they are not given as arguments
    #[arg(long, value_name = "PATH", env = "CINEMATCH_CONFIG")]
    pub config: Option<String>,

    /// Path of the watched list inside the export archives
    #[arg(long = "watched-file", value_name = "MEMBER")]
    pub watched_file: Option<String>,

    /// Path of the liked list inside the export archives
    #[arg(long = "liked-file", value_name = "MEMBER")]
    pub liked_file: Option<String>,

    /// Path of the watchlist inside the export archives
    #[arg(long = "watchlist-file", value_name = "MEMBER")]
    pub watchlist_file: Option<String>,

    /// Run a console command and exit (can be specified multiple times)
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Output format for reports: text or json
    #[arg(long = "output-format", value_name = "FORMAT", default_value = "text")]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
