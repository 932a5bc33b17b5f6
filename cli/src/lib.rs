//! Command definitions and execution for the `esimkit` binary.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use esimkit_activation::{build_qr_payload, build_universal_link, ActivationCode, FieldKind};
use esimkit_provisioning::SampleCatalog;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "esimkit")]
#[command(about = "Parse, build and validate eSIM activation codes")]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split an LPA activation string into its fields
    Parse {
        /// Raw activation string, e.g. LPA:1$rsp.example.com$MATCHINGID
        code: String,
    },
    /// Build a QR payload from its fields
    Payload {
        /// SM-DP+ address
        #[arg(long)]
        smdp: String,
        /// Matching ID
        #[arg(long)]
        matching_id: String,
        /// Confirmation code
        #[arg(long)]
        confirmation_code: Option<String>,
    },
    /// Build the provisioning Universal Link
    Link {
        /// QR payload, or an activation code with --from-code
        input: String,
        /// Parse the input and rebuild the payload from its fields first
        #[arg(long)]
        from_code: bool,
    },
    /// Validate a single field
    Validate {
        /// smdp_address, matching_id, eid or iccid
        kind: FieldKind,
        value: String,
    },
    /// Load a sample profile catalog and report invalid entries
    Catalog {
        /// Path to the catalog JSON file
        path: PathBuf,
    },
}

/// Rendered result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Text to print on stdout.
    pub text: String,
    /// False when the command ran but its subject failed validation.
    pub success: bool,
}

impl Output {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Executes a parsed command line.
pub fn run(cli: &Cli) -> Result<Output> {
    match &cli.command {
        Command::Parse { code } => Ok(parse(code, cli.json)),
        Command::Payload {
            smdp,
            matching_id,
            confirmation_code,
        } => {
            let payload = build_qr_payload(smdp, matching_id, confirmation_code.as_deref());
            Ok(Output::ok(if cli.json {
                json!({ "payload": payload }).to_string()
            } else {
                payload
            }))
        }
        Command::Link { input, from_code } => link(input, *from_code, cli.json),
        Command::Validate { kind, value } => Ok(validate(*kind, value, cli.json)),
        Command::Catalog { path } => catalog(path, cli.json),
    }
}

fn parse(raw: &str, as_json: bool) -> Output {
    let code = ActivationCode::parse(raw);
    let success = code.is_valid();
    let text = if as_json {
        json!({
            "raw": code.raw(),
            "smdp_address": code.smdp_address(),
            "matching_id": code.matching_id(),
            "confirmation_code": code.confirmation_code(),
            "is_valid": success,
        })
        .to_string()
    } else if success {
        let field = |v: Option<&str>| v.unwrap_or("-").to_string();
        format!(
            "smdp_address:      {}\nmatching_id:       {}\nconfirmation_code: {}",
            field(code.smdp_address()),
            field(code.matching_id()),
            field(code.confirmation_code()),
        )
    } else {
        format!("not an LPA activation code: {raw:?}")
    };
    Output { text, success }
}

fn link(input: &str, from_code: bool, as_json: bool) -> Result<Output> {
    let payload = if from_code {
        match ActivationCode::parse(input).qr_payload() {
            Some(payload) => payload,
            None => bail!("activation code has no SM-DP+ address and matching ID: {input:?}"),
        }
    } else {
        input.to_string()
    };
    debug!(%payload, "building universal link");
    let url = build_universal_link(&payload).context("failed to build universal link")?;
    Ok(Output::ok(if as_json {
        json!({ "url": url.as_str() }).to_string()
    } else {
        url.into()
    }))
}

fn validate(kind: FieldKind, value: &str, as_json: bool) -> Output {
    let valid = kind.validate(value);
    let text = if as_json {
        json!({ "field": kind, "value": value, "valid": valid }).to_string()
    } else if valid {
        format!("valid {kind}")
    } else {
        format!("invalid {kind}: {value:?}")
    };
    Output {
        text,
        success: valid,
    }
}

fn catalog(path: &Path, as_json: bool) -> Result<Output> {
    let catalog = SampleCatalog::load(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    let issues = catalog.audit();
    let success = issues.is_empty();

    let text = if as_json {
        serde_json::to_string(&json!({
            "profiles": catalog.profiles.len(),
            "issues": issues,
        }))?
    } else {
        let mut lines = vec![format!(
            "{} profiles, {} issues",
            catalog.profiles.len(),
            issues.len()
        )];
        for issue in &issues {
            let field = issue
                .field
                .map_or_else(|| "activation_code".to_string(), |f| f.to_string());
            lines.push(format!("  {}: invalid {} {:?}", issue.profile, field, issue.value));
        }
        lines.join("\n")
    };
    Ok(Output { text, success })
}
