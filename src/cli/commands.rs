use anyhow::Result;
use log::{debug, info};
use std::path::PathBuf;

use crate::ai::GeminiClient;
use crate::cli::{Cli, Commands, OutputFormatter};
use crate::config::{DefaultConfig, Settings};
use crate::prompts::load_prompts;
use crate::results::{write_records, ResponseRecord};

pub struct BatchHandler {
    settings: Settings,
    client: GeminiClient,
    formatter: OutputFormatter,
    input: PathBuf,
    output: PathBuf,
}

impl BatchHandler {
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut settings = Settings::load()?;

        // CLI flags take precedence over the config file
        if let Some(url) = &cli.url {
            settings.api.url = url.clone();
        }
        if let Some(key) = &cli.api_key {
            settings.api.key = key.clone();
        }

        let input = cli
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(&settings.files.input));
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&settings.files.output));

        let client = GeminiClient::new(&settings)?;
        let formatter = OutputFormatter::new(settings.output.use_colors);

        Ok(Self {
            settings,
            client,
            formatter,
            input,
            output,
        })
    }

    /// Runs the whole batch: load prompts, call the API once per prompt in
    /// input order, then write the collected records.
    ///
    /// An unreadable input file is the only fatal condition. Failed API
    /// calls are recorded as error strings inside the output, and a failed
    /// save is reported but does not fail the run.
    pub async fn run(&self) -> Result<()> {
        println!("--- Starting LLM prompt processing ---");
        println!("Reading prompts from '{}'...", self.input.display());

        let prompts = load_prompts(&self.input)?;

        if prompts.is_empty() {
            println!(
                "{}",
                self.formatter.format_warning(&format!(
                    "No prompts found in '{}'. Nothing to do.",
                    self.input.display()
                ))
            );
            return Ok(());
        }

        let total = prompts.len();
        println!("Found {total} prompts. Calling API for each...");

        let mut records = Vec::with_capacity(total);
        for (i, prompt) in prompts.iter().enumerate() {
            let preview: String = prompt.chars().take(60).collect();
            println!("[{}/{total}] Processing prompt: '{preview}...'", i + 1);

            let record = ResponseRecord {
                prompt: prompt.clone(),
                response: self.client.complete(prompt).await,
            };
            if record.is_error() {
                debug!("Prompt {} failed: {}", i + 1, record.response);
            }
            records.push(record);
        }

        println!("\nSaving responses to '{}'...", self.output.display());
        match write_records(&records, &self.output) {
            Ok(()) => {
                info!("Batch finished, {} records written", records.len());
                println!(
                    "{}",
                    self.formatter
                        .format_success(&format!("Successfully saved {} responses.", records.len()))
                );
            }
            // A failed save still counts as a completed run
            Err(e) => {
                eprintln!(
                    "{}",
                    self.formatter
                        .format_error(&format!("Could not save responses: {e:#}"))
                );
            }
        }

        println!("--- Process complete ---");
        Ok(())
    }

    pub fn handle_command(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Init => self.handle_init(),
            Commands::Config => self.handle_config(),
            // Version is handled early in main
            Commands::Version => Ok(String::new()),
        }
    }

    fn handle_init(&self) -> Result<String> {
        let config_path = self.settings.get_config_path()?;

        if config_path.exists() {
            return Ok(self.formatter.format_warning(&format!(
                "Config file already exists at {}",
                config_path.display()
            )));
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, DefaultConfig::create_default_config_file())?;

        Ok(self.formatter.format_success(&format!(
            "Wrote default config to {}. Set your API key there before running.",
            config_path.display()
        )))
    }

    fn handle_config(&self) -> Result<String> {
        let config_path = self.settings.get_config_path()?;
        let content = toml::to_string_pretty(&self.settings)?;

        Ok(format!(
            "Config file: {}\n\n{}",
            config_path.display(),
            content
        ))
    }

    pub fn format_error(&self, message: &str) -> String {
        self.formatter.format_error(message)
    }
}
