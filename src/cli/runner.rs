//! CLI runner - executes commands

use crate::alerts::{alert_schema, alerts_to_records, sample_alerts, DEFAULT_OUTPUT};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Result, ResultExt};
use crate::loader::{load_records, load_schema};
use crate::output::{read_avro_file, write_records_to_avro, AvroWriterConfig};
use crate::types::{CompressionCodec, JsonObject};
use chrono::Utc;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run_with_output(&mut stdout.lock())
    }

    /// Run the CLI command, printing to `out`
    pub fn run_with_output(&self, out: &mut dyn Write) -> Result<()> {
        match &self.cli.command {
            None => self.write(
                Path::new(DEFAULT_OUTPUT),
                None,
                None,
                CompressionCodec::Null,
                &[],
            ),
            Some(Commands::Write {
                output,
                schema,
                records,
                codec,
                metadata,
            }) => self.write(
                output,
                Some(schema.as_str()),
                records.as_deref(),
                *codec,
                metadata,
            ),
            Some(Commands::Read { input, format }) => self.read(input, *format, out),
            Some(Commands::Schema { input }) => self.schema(input.as_deref(), out),
        }
    }

    /// Write records (or the sample alerts) to a container
    fn write(
        &self,
        output: &Path,
        schema: Option<&str>,
        records: Option<&Path>,
        codec: CompressionCodec,
        metadata: &[(String, String)],
    ) -> Result<()> {
        let schema = match schema {
            Some(name) => load_schema(name)?,
            None => alert_schema()?,
        };

        let records: Vec<JsonObject> = match records {
            Some(path) => load_records(path)?,
            None => alerts_to_records(&sample_alerts(Utc::now()))?,
        };
        info!(
            "Writing {} record(s) with schema {}",
            records.len(),
            schema.full_name()
        );

        let config = metadata.iter().fold(
            AvroWriterConfig::new().with_codec(codec),
            |config, (key, value)| config.with_metadata(key.clone(), value.clone()),
        );

        write_records_to_avro(output, &schema, &records, Some(&config))?;
        Ok(())
    }

    /// Print the records of a container
    fn read(&self, input: &Path, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        let container = read_avro_file(input)?;

        for record in &container.records {
            let line = match format {
                OutputFormat::Json => serde_json::to_string(record)?,
                OutputFormat::Pretty => serde_json::to_string_pretty(record)?,
            };
            writeln!(out, "{line}").context("Failed to print record")?;
        }

        if format == OutputFormat::Pretty {
            writeln!(
                out,
                "-- {} record(s), schema {}",
                container.len(),
                container.schema.full_name()
            )
            .context("Failed to print summary")?;
        }
        Ok(())
    }

    /// Print a container's embedded schema, or the built-in alert schema
    fn schema(&self, input: Option<&Path>, out: &mut dyn Write) -> Result<()> {
        let schema = match input {
            Some(path) => read_avro_file(path)?.schema,
            None => alert_schema()?,
        };
        writeln!(out, "{}", schema.to_json_pretty()?).context("Failed to print schema")?;
        Ok(())
    }
}
