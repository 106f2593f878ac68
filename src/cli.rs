use crate::config::Config;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "countrysrv",
    about = "HTTP server that serves country metadata keyed by name or ISO code",
    version,
    author
)]
pub struct Args {
    #[arg(short, long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub assets_dir: Option<String>,
}

impl Args {
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server_port = port;
        }
        if let Some(assets_dir) = &self.assets_dir {
            config.assets_dir = assets_dir.clone();
        }
    }
}
