use clap::{Args, Parser, Subcommand, ValueEnum};
use custbook::model::Section;
use std::path::PathBuf;

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "custbook", bin_name = "custbook", version = get_version())]
#[command(about = "Local customer book with printable PDF exports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding customers.json and config.json
    #[arg(long, global = true, env = "CUSTBOOK_DATA", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a customer
    #[command(alias = "n")]
    Create {
        /// Customer name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// List customers
    #[command(alias = "ls")]
    List,

    /// Show customers with all their entries
    #[command(alias = "v")]
    View {
        /// Indexes (1 2 3) or a name
        #[arg(required = true, num_args = 1..)]
        customers: Vec<String>,
    },

    /// Change a customer's name or contact details
    Update {
        /// Index or name of the customer
        #[arg(required = true, num_args = 1..)]
        customer: Vec<String>,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Permanently delete customers
    #[command(alias = "rm")]
    Delete {
        /// Indexes (1 2 3) or a name
        #[arg(required = true, num_args = 1..)]
        customers: Vec<String>,
    },

    /// Add or remove received items and detail entries
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Search names, contact details and entries
    Search {
        #[arg(num_args = 0..)]
        term: Vec<String>,
    },

    /// Write customers to PDF (<name>_details.pdf)
    Export {
        /// Indexes or a name; all customers if omitted
        #[arg(num_args = 0..)]
        customers: Vec<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Write a .tar.gz backup of all customers
    Backup {
        /// Output file or directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Delete all customers and reset settings
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (language, default-currency, active-currencies, page-size, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Manage active currencies
    #[command(subcommand)]
    Currency(CurrencyCommands),
}

#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    /// Phone number (empty string clears it on update)
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Postal address
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Append an entry to a customer
    Add {
        /// Index or name of the customer
        #[arg(required = true, num_args = 1..)]
        customer: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = SectionArg::Received)]
        section: SectionArg,

        #[arg(short, long)]
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,

        /// Currency code; defaults to the configured default currency
        #[arg(long)]
        currency: Option<String>,
    },

    /// Remove an entry by its position in the section (1 = first)
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        customer: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = SectionArg::Received)]
        section: SectionArg,

        #[arg(short, long)]
        position: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// Show supported currencies and which are active
    #[command(alias = "ls")]
    List,

    /// Enable or disable a currency
    Toggle { code: String },

    /// Set the default currency for new entries
    Default { code: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Received,
    Details,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Received => Section::Received,
            SectionArg::Details => Section::Details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_entry_add() {
        let cli = Cli::try_parse_from([
            "custbook", "entry", "add", "acme", "co", "-s", "details", "-t", "Rate", "--currency",
            "EUR",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Entry(EntryCommands::Add {
                customer,
                section,
                title,
                currency,
                ..
            })) => {
                assert_eq!(customer, vec!["acme", "co"]);
                assert_eq!(section, SectionArg::Details);
                assert_eq!(title, "Rate");
                assert_eq!(currency.as_deref(), Some("EUR"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn create_joins_words_into_name() {
        let cli =
            Cli::try_parse_from(["custbook", "create", "Acme", "Co", "--phone", "555"]).unwrap();
        match cli.command {
            Some(Commands::Create { name, contact }) => {
                assert_eq!(name.join(" "), "Acme Co");
                assert_eq!(contact.phone.as_deref(), Some("555"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
