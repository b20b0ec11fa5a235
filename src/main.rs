use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use folder_notes_web::navigation::PrintNavigator;
use folder_notes_web::{delete_folder, delete_note, server, ApiClient, FolderId, NoteId};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Delete folders and notes, then point the user at the page to go back to
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ApiArgs {
    /// Host for the API server (default: "localhost")
    #[arg(short = 'S', long, default_value_t = String::from("localhost"), required = false)]
    api_host: String,

    /// Port for the API server (default: 5000)
    #[arg(short = 'P', long, default_value_t = 5000, required = false)]
    api_port: u16,

    /// Scheme for the API (http or https) (default: "http")
    #[arg(short = 't', long, default_value_t = String::from("http"), required = false)]
    api_scheme: String,

    /// Fail on non-2xx answers instead of treating any answer as settled
    #[arg(long)]
    strict_status: bool,
}

impl ApiArgs {
    fn api_addr(&self) -> String {
        format!("{}://{}:{}", self.api_scheme, self.api_host, self.api_port)
    }

    fn client(&self) -> Result<ApiClient> {
        let api_addr = self.api_addr();
        let client = ApiClient::new(&api_addr)
            .with_context(|| format!("Invalid API address {api_addr}"))?;
        Ok(client.with_strict_status(self.strict_status))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Delete a folder, then print the folders listing URL
    DeleteFolder {
        folder_id: String,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Delete a note, then print the URL of its folder
    DeleteNote {
        note_id: String,
        folder_id: String,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Serve the Web Application
    Serve {
        #[command(flatten)]
        api: ApiArgs,

        /// Port for the Web App
        #[arg(short = 'p', long, default_value_t = String::from("8080"), required = false)]
        port: String,

        /// Host for the Web App
        #[arg(short = 's', long, default_value_t = String::from("0.0.0.0"), required = false)]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("folder_notes_web={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::DeleteFolder { folder_id, api } => {
            let client = api.client()?;
            let mut navigator = PrintNavigator::stdout(client.base_url().clone());
            delete_folder(&client, &mut navigator, &FolderId::from(folder_id)).await?;
        }
        Command::DeleteNote {
            note_id,
            folder_id,
            api,
        } => {
            let client = api.client()?;
            let mut navigator = PrintNavigator::stdout(client.base_url().clone());
            delete_note(
                &client,
                &mut navigator,
                &NoteId::from(note_id),
                &FolderId::from(folder_id),
            )
            .await?;
        }
        Command::Serve { api, port, host } => {
            let client = api.client()?;
            server::serve(client, &host, &port)
                .await
                .context("Unable to serve application")?;
        }
    }

    Ok(())
}
