use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{debug, warn};
use tokio::{signal, time};

use pwadev::icons::{self, IconConfig};
use pwadev::{DevServer, DevServerConfig, Error};

/// How long the browser timer waits, so the listener is accepting first.
const OPEN_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Parser)]
#[command(name = "pwadev", version, about = "Developer toolkit for the PWA under test")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the PWA icon set as PNG files
    Icons {
        /// Output directory for the PNG files
        #[arg(long, default_value = "icons")]
        out_dir: PathBuf,

        /// Pixel sizes to render
        #[arg(long, value_delimiter = ',', default_values_t = icons::DEFAULT_SIZES.to_vec())]
        sizes: Vec<u32>,

        /// Also write the manifest `icons` array as JSON to this path
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Serve a directory over HTTP for manual PWA testing
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Directory served as the site root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Landing page opened in the browser
        #[arg(long, default_value = "index.html")]
        page: String,

        /// Do not open the browser (headless or scripted runs)
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Icons {
            out_dir,
            sizes,
            manifest,
        } => run_icons(out_dir, sizes, manifest),
        Command::Serve {
            port,
            root,
            page,
            no_open,
        } => {
            run_serve(DevServerConfig {
                port,
                root,
                page,
                open_browser: !no_open,
            })
            .await
        }
    };

    if let Err(e) = result {
        eprintln!("pwadev: {e}");
        std::process::exit(1);
    }
}

fn run_icons(out_dir: PathBuf, sizes: Vec<u32>, manifest: Option<PathBuf>) -> pwadev::Result<()> {
    let config = IconConfig { out_dir, sizes };
    icons::generate(&config)?;
    if let Some(path) = manifest {
        icons::write_manifest(&config, &path)?;
    }
    Ok(())
}

async fn run_serve(config: DevServerConfig) -> pwadev::Result<()> {
    let server = match DevServer::bind(&config) {
        Ok(server) => server,
        Err(Error::PortInUse(port)) => {
            eprintln!("❌ Port {port} is already in use, try again with --port <PORT>");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Failed to start server: {e}");
            std::process::exit(1);
        }
    };

    let url = server.url();
    print_banner(&url);

    std::thread::spawn(move || server.run());

    if config.open_browser {
        let url = url.clone();
        tokio::spawn(async move {
            time::sleep(OPEN_DELAY).await;
            debug!("opening {url} in the default browser");
            if let Err(e) = open::that(&url) {
                warn!("failed to open browser: {e}");
            }
        });
    }

    if let Err(e) = signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
    }
    println!();
    println!("👋 Server stopped");
    Ok(())
}

fn print_banner(url: &str) {
    println!("🚀 PWA dev server starting...");
    println!("📱 URL: {url}");
    println!("🔧 Press Ctrl+C to stop");
    println!();
    println!("PWA test checklist:");
    println!("  1. Open the URL above in your browser");
    println!("  2. Check DevTools > Application > Service Workers");
    println!("  3. Check Application > Manifest");
    println!("  4. Look for the install icon in the address bar (Chrome)");
    println!("  5. Test offline mode (Network tab > Offline)");
    println!();
}
