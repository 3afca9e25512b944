use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::env;

use crate::services::object_store::bucket_name_from;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Which dispatcher(s) this process serves.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Function {
    /// `/files/*` only.
    Files,
    /// `/folders/*` only.
    Folders,
    /// Both route tables.
    #[default]
    All,
}

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Bucket name with any `arn:aws:s3:::` qualifier already stripped.
    pub bucket: String,
    pub region: String,
    pub endpoint_url: Option<String>,
    pub function: Function,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Per-account folder and file metadata functions over S3")]
pub struct Args {
    /// Host to bind to (overrides ACCOUNT_FOLDERS_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides ACCOUNT_FOLDERS_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Bucket name or S3 bucket ARN (overrides S3_FREE_ACCOUNTS_ARN)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Storage region (overrides AWS_REGION)
    #[arg(long)]
    pub region: Option<String>,

    /// Custom S3-compatible endpoint (overrides S3_ENDPOINT_URL)
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Route table(s) to serve
    #[arg(long, value_enum, default_value_t = Function::All)]
    pub function: Function,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        Self::merge(Args::parse(), |key| env::var(key))
    }

    /// Merge parsed CLI args over values produced by `lookup`.
    fn merge<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let optional = |key: &str| -> Result<Option<String>> {
            match lookup(key) {
                Ok(value) if value.is_empty() => Ok(None),
                Ok(value) => Ok(Some(value)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(err) => Err(err).with_context(|| format!("reading {key}")),
            }
        };

        // --- Environment fallback ---
        let env_host = optional("ACCOUNT_FOLDERS_HOST")?.unwrap_or_else(|| "0.0.0.0".into());
        let env_port = match optional("ACCOUNT_FOLDERS_PORT")? {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing ACCOUNT_FOLDERS_PORT value `{}`", value))?,
            None => 3000,
        };
        let env_bucket = optional("S3_FREE_ACCOUNTS_ARN")?;
        let env_region = optional("AWS_REGION")?;
        let env_endpoint = optional("S3_ENDPOINT_URL")?;

        // --- Merge ---
        let Some(raw_bucket) = args.bucket.or(env_bucket) else {
            bail!("no bucket configured: set S3_FREE_ACCOUNTS_ARN or pass --bucket");
        };
        let bucket = bucket_name_from(&raw_bucket).to_string();
        if bucket.is_empty() {
            bail!("bucket identifier `{}` names no bucket", raw_bucket);
        }

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            bucket,
            region: args
                .region
                .or(env_region)
                .unwrap_or_else(|| DEFAULT_REGION.into()),
            endpoint_url: args.endpoint_url.or(env_endpoint),
            function: args.function,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
