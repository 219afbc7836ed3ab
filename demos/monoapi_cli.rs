use clap::{Parser, Subcommand, ValueEnum};
use monoapi::{Client, Config, StatementOutput, StatementResponse};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "monoapi-cli", about = "CLI wrapper for the Mono API")]
struct Cli {
    /// Secret key; falls back to MONO_SECRET_KEY env var
    #[arg(long, env = "MONO_SECRET_KEY")]
    secret_key: String,

    /// API url override, e.g. for a sandbox proxy
    #[arg(long, env = "MONO_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Exchange a Mono Connect code for an account id
    ExchangeToken { code: String },
    /// Show account details
    Info { id: String },
    /// Request a statement
    Statement {
        id: String,
        /// Period such as last6months
        #[arg(long, default_value = "")]
        period: String,
        #[arg(long, value_enum, default_value = "json")]
        output: OutputFmt,
    },
    /// Poll a PDF statement job
    JobStatus { id: String, job_id: String },
    /// List transactions
    Transactions {
        id: String,
        #[arg(long, default_value = "")]
        start: String,
        #[arg(long, default_value = "")]
        end: String,
        #[arg(long, default_value = "")]
        narration: String,
        #[arg(long = "type", default_value = "")]
        transaction_type: String,
        #[arg(long)]
        paginate: bool,
    },
    /// Show credit totals
    Credits { id: String },
    /// Show debit totals
    Debits { id: String },
    /// Show income estimate
    Income { id: String },
    /// Show account holder identity
    Identity { id: String },
    /// List covered institutions
    Institutions,
    /// Look up a BVN
    LookupBvn { bvn: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFmt {
    Json,
    Pdf,
}

impl From<OutputFmt> for StatementOutput {
    fn from(value: OutputFmt) -> Self {
        match value {
            OutputFmt::Json => StatementOutput::Json,
            OutputFmt::Pdf => StatementOutput::Pdf,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::new(cli.secret_key)?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    let client = Client::new(config)?;

    match cli.command {
        Commands::ExchangeToken { code } => {
            println!("{}", client.exchange_token(&code).await?);
        }
        Commands::Info { id } => {
            let info = client.information(&id).await?;
            println!("{:#?}", info.account);
        }
        Commands::Statement { id, period, output } => {
            match client
                .statement_with_output(&id, &period, output.into())
                .await?
            {
                StatementResponse::Json(data) => {
                    for row in &data.data {
                        println!(
                            "{} | {} {} {} | balance {}",
                            row.date
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_default(),
                            row.entry_type,
                            row.amount,
                            row.narration,
                            row.balance
                        );
                    }
                }
                StatementResponse::Pdf(job) => {
                    println!("job={} status={:?} path={:?}", job.id, job.status, job.path);
                }
            }
        }
        Commands::JobStatus { id, job_id } => {
            let job = client.pdf_statement_job_status(&id, &job_id).await?;
            println!("job={} status={:?} path={:?}", job.id, job.status, job.path);
        }
        Commands::Transactions {
            id,
            start,
            end,
            narration,
            transaction_type,
            paginate,
        } => {
            let response = client
                .transactions(&id, &start, &end, &narration, &transaction_type, paginate)
                .await?;
            for txn in &response.data {
                println!(
                    "{} | {} {} {}",
                    txn.id, txn.transaction_type, txn.amount, txn.narration
                );
            }
            println!(
                "page {} of {} total",
                response.paging.page, response.paging.total
            );
        }
        Commands::Credits { id } => {
            let totals = client.credit_transactions(&id).await?;
            println!("{totals:#?}");
        }
        Commands::Debits { id } => {
            let totals = client.debit_transactions(&id).await?;
            println!("{totals:#?}");
        }
        Commands::Income { id } => {
            let income = client.income(&id).await?;
            println!("{income:#?}");
        }
        Commands::Identity { id } => {
            let identity = client.identity(&id).await?;
            println!("{identity:#?}");
        }
        Commands::Institutions => {
            for institution in client.institutions().await?.institutions {
                println!("{} ({})", institution.name, institution.products.join(", "));
            }
        }
        Commands::LookupBvn { bvn } => {
            let identity = client.lookup_bvn(&bvn).await?;
            println!("{identity:#?}");
        }
    }

    Ok(())
}
