use crate::client::DEFAULT_SERVICE_URL;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "iris-ui")]
#[command(author, version, about = "Web form for the Iris prediction service")]
pub struct Cli {
    /// Prediction endpoint of the inference service
    #[arg(short, long, default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Listen port
    #[arg(short, long, default_value = "8501")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_url() {
        let cli = Cli::parse_from(["iris-ui"]);
        assert_eq!(cli.service_url, "http://localhost:5000/predict");
        assert_eq!(cli.address, "127.0.0.1");
        assert_eq!(cli.port, 8501);
    }
}
