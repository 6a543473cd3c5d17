use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "ner_dashboard", version, about = "BioBERT NER metrics dashboard")]
pub struct CliArgs {
    /// Print metrics and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Run a single prediction on TEXT and exit
    #[arg(long, value_name = "TEXT")]
    pub predict: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the inference API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the log file used while the dashboard is on screen
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("API_URL", url);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Headless when asked to, or when there is nothing interactive to do.
    pub const fn wants_headless(&self) -> bool {
        self.headless || self.json || self.predict.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_flag_implies_headless() {
        let args = CliArgs::parse_from(["ner_dashboard", "--predict", "aspirin"]);
        assert!(args.wants_headless());
        assert_eq!(args.predict.as_deref(), Some("aspirin"));
    }

    #[test]
    fn test_interactive_by_default() {
        let args = CliArgs::parse_from(["ner_dashboard", "--api-url", "http://127.0.0.1:7860"]);
        assert!(!args.wants_headless());
        assert_eq!(args.api_url.as_deref(), Some("http://127.0.0.1:7860"));
    }
}
