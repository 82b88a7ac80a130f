use clap::{Parser, Subcommand};
use photosite::imaging::{Quality, RustBackend};
use photosite::{compress, manifest, output, serve};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "photosite")]
#[command(about = "Utility toolbox for a static photography website")]
#[command(long_about = "\
Utility toolbox for a static photography website

Three independent commands, all defaulted to the repository layout below so
each can run with zero arguments from the site root:

  site/
  ├── index.html                     # Hand-written pages at the root
  ├── photography.html               # Reads client-manifests.json
  ├── style.css
  ├── client-manifests.json          # Written by `photosite manifest`
  └── images/
      └── PHOTOGRAPHY/               # Walked by `photosite compress`
          └── CLIENT/                # Scanned by `photosite manifest`
              ├── acme/
              │   ├── a.JPG
              │   └── b.png
              └── northwind/
                  └── launch.webp

Run `photosite manifest` after adding or removing photos in any client
folder, `photosite compress` before committing new originals, and
`photosite serve` while editing pages.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate client-manifests.json from the client image folders
    Manifest {
        /// Client folder root
        #[arg(long, default_value = manifest::CLIENT_ROOT)]
        root: PathBuf,
        /// Output file
        #[arg(long, default_value = manifest::MANIFEST_FILE)]
        out: PathBuf,
    },
    /// Re-encode every image under the photography root, in place
    Compress {
        /// Photography image root
        #[arg(long, default_value = compress::PHOTOGRAPHY_ROOT)]
        root: PathBuf,
        /// Maximum output width in pixels
        #[arg(long, default_value_t = compress::MAX_WIDTH)]
        max_width: u32,
        /// Lossy encoding quality (1-100)
        #[arg(long, default_value_t = 85)]
        quality: u32,
    },
    /// Serve the site locally with live reload
    Serve {
        /// Site root to serve
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Port to bind on localhost
        #[arg(long, default_value_t = serve::DEFAULT_PORT)]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Manifest { root, out } => {
            let manifests = manifest::build(&root)?;
            manifest::write(&manifests, &out)?;
            output::print_manifest_output(&manifests, &out);
        }
        Command::Compress {
            root,
            max_width,
            quality,
        } => {
            let backend = RustBackend::new();
            let report = compress::run(&backend, &root, Quality::new(quality), max_width)?;
            if report.total > 0 {
                output::print_compress_summary(&report);
            }
        }
        Command::Serve { root, port } => {
            serve::serve(&root, port)?;
        }
    }

    Ok(())
}
