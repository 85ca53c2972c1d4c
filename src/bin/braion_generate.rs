

use std::env;

use braion::{BraionConfig, NamePipeline, NameRequest};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("braion=warn".parse()?))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = BraionConfig::from_env()?;

    let mut request = NameRequest::new("");
    request.count = config.name_count;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).cloned();
        match args[i].as_str() {
            "--description" | "-d" => {
                if let Some(v) = value {
                    request.description = v;
                    i += 1;
                }
            }
            "--project" | "-p" => {
                if value.is_some() {
                    request.project_description = value;
                    i += 1;
                }
            }
            "--prompt" => {
                if value.is_some() {
                    request.custom_prompt = value;
                    i += 1;
                }
            }
            "--tone" | "-t" => {
                if let Some(v) = value {
                    request.tone = v;
                    i += 1;
                }
            }
            "--domain" => {
                if value.is_some() {
                    request.domain = value;
                    i += 1;
                }
            }
            "--purpose" => {
                if let Some(v) = value {
                    request.purpose = v;
                    i += 1;
                }
            }
            "--count" | "-n" => {
                if let Some(v) = value {
                    request.count = parse_count(&v)?;
                    i += 1;
                }
            }
            "--llm" => request.use_llm = Some(true),
            "--no-llm" => request.use_llm = Some(false),
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => eprintln!("⚠️  Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    let pipeline = NamePipeline::from_config(&config)?;
    let response = pipeline.handle(&request).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn parse_count(value: &str) -> anyhow::Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid --count value '{}': expected a positive integer", value))
}

fn print_help() {
    println!("braion-generate - team/product name generator");
    println!();
    println!("USAGE:");
    println!("    braion-generate --description TEXT [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -d, --description TEXT   What the team or product is about");
    println!("    -p, --project TEXT       Longer project description (enables ranking)");
    println!("        --prompt TEXT        Custom instruction for the names");
    println!("    -t, --tone TONE          professional | cool | funny | aggressive | minimal");
    println!("        --domain DOMAIN      e.g. AI, IoT, \"AI and IoT\"");
    println!("        --purpose TEXT       Purpose label echoed in the response");
    println!("    -n, --count N            Total names, split between both lists (default: 10)");
    println!("        --llm / --no-llm     Force LLM ranking on or off");
    println!("    -h, --help               Print help");
    println!();
    println!("ENVIRONMENT:");
    println!("    HF_API_KEY               Hugging Face token for LLM ranking");
    println!("    BRAION_CONFIG            Optional config file");
    println!("    BRAION_*                 Any config field, e.g. BRAION_LLM_PROVIDER=ollama");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12").unwrap(), 12);
        assert_eq!(parse_count(" 4 ").unwrap(), 4);
    }

    #[test]
    fn test_parse_count_reports_bad_value() {
        let err = parse_count("ten").unwrap_err();
        assert!(err.to_string().contains("'ten'"));
        assert!(parse_count("-3").is_err());
    }
}
