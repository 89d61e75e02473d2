//! api-doc-parser CLI
//!
//! Fetch live Hydra documentation or parse local OpenAPI/Swagger/GraphQL
//! documents and print the normalized resource model.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;

use api_doc_parser::graphql::GraphQlParser;
use api_doc_parser::openapi::OpenApiParser;
use api_doc_parser::swagger::SwaggerParser;
use api_doc_parser::{FetchOptions, HeaderMap, HeaderName, HeaderValue, HydraParser};
use api_doc_parser_common::Api;

#[derive(Parser)]
#[command(name = "api-doc-parser")]
#[command(version, about = "Parse API descriptions into a normalized resource model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the normalized model as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and parse live Hydra/JSON-LD documentation
    #[command(after_help = "EXAMPLES:\n  \
        api-doc-parser fetch --entrypoint https://demo.example.com\n\n  \
        # With an authorization header\n  \
        api-doc-parser fetch --entrypoint https://demo.example.com \\\n    \
        --header 'Authorization: Bearer TOKEN'\n\n  \
        # Also fetch each collection's query parameters\n  \
        api-doc-parser fetch --entrypoint https://demo.example.com --parameters")]
    Fetch {
        /// API entrypoint URL
        #[arg(short, long)]
        entrypoint: String,

        /// Additional request header, as 'Name: value' (repeatable)
        #[arg(long = "header")]
        headers: Vec<String>,

        /// Fetch each resource's collection parameters as well
        #[arg(long)]
        parameters: bool,
    },

    /// Parse a local API description document
    #[command(after_help = "EXAMPLES:\n  \
        api-doc-parser parse --spec openapi.json\n\n  \
        # Auto-detection can be overridden\n  \
        api-doc-parser parse --spec introspection.json --format graphql \\\n    \
        --entrypoint https://example.com/graphql")]
    Parse {
        /// Path to the document
        #[arg(short, long)]
        spec: PathBuf,

        /// Document format (auto-detected if not specified)
        #[arg(short, long)]
        format: Option<SpecFormat>,

        /// Entrypoint URL recorded in the model (defaults to the one
        /// declared in the document, if any)
        #[arg(long)]
        entrypoint: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpecFormat {
    /// OpenAPI 3.x
    Openapi,
    /// Swagger 2.0
    Swagger,
    /// GraphQL introspection result
    Graphql,
}

impl std::fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecFormat::Openapi => write!(f, "OpenAPI"),
            SpecFormat::Swagger => write!(f, "Swagger"),
            SpecFormat::Graphql => write!(f, "GraphQL"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch {
            entrypoint,
            headers,
            parameters,
        } => fetch_command(&entrypoint, &headers, parameters, cli.json, cli.verbose).await,
        Commands::Parse {
            spec,
            format,
            entrypoint,
        } => parse_command(&spec, format, entrypoint.as_deref(), cli.json, cli.verbose),
    }
}

async fn fetch_command(
    entrypoint: &str,
    headers: &[String],
    with_parameters: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let mut map = HeaderMap::new();
    for raw in headers {
        let (name, value) = raw
            .split_once(':')
            .context("headers must look like 'Name: value'")?;
        let name: HeaderName = name.trim().parse().context("invalid header name")?;
        let value: HeaderValue = value.trim().parse().context("invalid header value")?;
        map.insert(name, value);
    }
    let parser = if map.is_empty() {
        HydraParser::new()
    } else {
        HydraParser::with_options(FetchOptions::with_headers(map))
    };

    println!("{} Fetching entrypoint: {}", "→".cyan(), entrypoint);
    let parsed = match parser.parse(entrypoint).await {
        Ok(parsed) => parsed,
        Err(failure) => {
            let status = failure
                .status
                .map(|status| status.to_string())
                .unwrap_or_else(|| "-".to_owned());
            anyhow::bail!("parse failed (status {}): {}", status, failure.error);
        }
    };

    let mut api = parsed.api;
    if with_parameters {
        for index in 0..api.resources.len() {
            let result = parser.get_parameters(&api.resources[index]).await;
            match result {
                Ok(parameters) => api.resources[index].parameters = parameters,
                Err(error) => {
                    eprintln!("{} {}: {}", "⚠".yellow(), api.resources[index].name, error)
                }
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&api)?);
    } else {
        print_api(&api, verbose);
    }
    Ok(())
}

fn parse_command(
    spec_path: &Path,
    format: Option<SpecFormat>,
    entrypoint: Option<&str>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    println!("{} Parsing spec file: {}", "→".cyan(), spec_path.display());
    let content = std::fs::read_to_string(spec_path)
        .with_context(|| format!("failed to read {}", spec_path.display()))?;

    let detected_format = format.unwrap_or_else(|| {
        let detected = detect_format(spec_path, &content);
        println!(
            "{} Auto-detected format: {}",
            "→".cyan(),
            detected.to_string().yellow()
        );
        detected
    });

    let api = match detected_format {
        SpecFormat::Openapi => {
            let mut parser = OpenApiParser::from_json(&content).context("failed to load OpenAPI spec")?;
            if let Some(entrypoint) = entrypoint {
                parser = parser.with_entrypoint(entrypoint);
            }
            parser.parse().context("failed to parse OpenAPI spec")?
        }
        SpecFormat::Swagger => {
            let mut parser = SwaggerParser::from_json(&content).context("failed to load Swagger spec")?;
            if let Some(entrypoint) = entrypoint {
                parser = parser.with_entrypoint(entrypoint);
            }
            parser.parse().context("failed to parse Swagger spec")?
        }
        SpecFormat::Graphql => {
            GraphQlParser::from_json(&content, entrypoint.unwrap_or("/graphql"))
                .context("failed to load GraphQL introspection result")?
                .parse()
                .context("failed to parse GraphQL introspection result")?
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&api)?);
    } else {
        print_api(&api, verbose);
    }
    Ok(())
}

/// Detect the document format from its filename and content markers.
fn detect_format(path: &Path, content: &str) -> SpecFormat {
    if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
        if name.contains("swagger") {
            return SpecFormat::Swagger;
        }
        if name.contains("openapi") {
            return SpecFormat::Openapi;
        }
        if name.contains("graphql") || name.contains("introspection") {
            return SpecFormat::Graphql;
        }
    }
    if content.contains("\"swagger\"") {
        return SpecFormat::Swagger;
    }
    if content.contains("\"__schema\"") {
        return SpecFormat::Graphql;
    }
    SpecFormat::Openapi
}

fn print_api(api: &Api, verbose: bool) {
    println!("\n{}", "✓ Parse successful!".green().bold());
    if let Some(title) = &api.title {
        println!("  Title: {}", title.yellow());
    }
    println!("  Entrypoint: {}", api.entrypoint.yellow());
    println!("  Resources: {}", api.resources.len());

    for resource in &api.resources {
        println!("\n  • {} ({})", resource.name.cyan(), resource.url);
        if !verbose {
            println!(
                "      Fields: {}  Operations: {}",
                resource.fields.len(),
                resource.operations.len()
            );
            continue;
        }
        for field in &resource.fields {
            let mut flags = Vec::new();
            if field.required {
                flags.push("required");
            }
            if field.readable {
                flags.push("r");
            }
            if field.writable {
                flags.push("w");
            }
            println!(
                "      {} [{}] {}",
                field.name,
                flags.join(","),
                field.range.as_deref().unwrap_or("-")
            );
        }
        for operation in &resource.operations {
            println!(
                "      {} {:?} {}",
                operation.method.as_deref().unwrap_or("-"),
                operation.kind,
                operation.name
            );
        }
        for parameter in &resource.parameters {
            println!("      ?{}", parameter.variable);
        }
    }
}
