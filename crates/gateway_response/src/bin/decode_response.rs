use std::{io::Read, path::PathBuf};

use gateway_response::{
    configs::settings::Settings,
    connector::Gateway,
    core::errors::ApplicationResult,
    logger,
    types::{self, models::ResponseFamily},
};

/// Decode a gateway response body and print the typed result as JSON.
#[derive(clap::Parser, Debug)]
struct CmdLineConf {
    /// Family of the response, from the operation that produced it.
    #[arg(value_enum)]
    family: FamilyArg,

    /// File holding the response body. Read from stdin if not specified.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Wallet provider key; defaults to `decoder.wallet_provider`.
    #[arg(long)]
    wallet_provider: Option<String>,

    /// HTTP status the body was received with.
    #[arg(long, default_value_t = 200)]
    status_code: u16,

    /// Config file to use instead of `config/<RUN_ENV>.toml`.
    #[arg(short = 'f', long, value_name = "FILE")]
    config_path: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FamilyArg {
    Transaction,
    HostedCheckout,
    BrowserPayment,
    BrowserPaymentRedirect,
    SecureIdEnrollment,
    HostedSession,
    Wallet,
    Token,
    WebhookNotification,
    NameValuePairs,
    NameValueTransaction,
}

impl FamilyArg {
    fn into_family(self, wallet_provider: String) -> ResponseFamily {
        match self {
            Self::Transaction => ResponseFamily::Transaction,
            Self::HostedCheckout => ResponseFamily::HostedCheckout,
            Self::BrowserPayment => ResponseFamily::BrowserPayment,
            Self::BrowserPaymentRedirect => ResponseFamily::BrowserPaymentRedirect,
            Self::SecureIdEnrollment => ResponseFamily::SecureIdEnrollment,
            Self::HostedSession => ResponseFamily::HostedSession,
            Self::Wallet => ResponseFamily::Wallet {
                provider: wallet_provider,
            },
            Self::Token => ResponseFamily::Token,
            Self::WebhookNotification => ResponseFamily::WebhookNotification,
            Self::NameValuePairs => ResponseFamily::NameValuePairs,
            Self::NameValueTransaction => ResponseFamily::NameValueTransaction,
        }
    }
}

fn main() -> ApplicationResult<()> {
    let cmd_line = <CmdLineConf as clap::Parser>::parse();

    let conf = Settings::with_config_path(cmd_line.config_path)?;
    conf.validate()?;

    if let Err(error) = logger::setup(&conf.log, ["gateway_response", env!("CARGO_CRATE_NAME")]) {
        eprintln!("Unable to set up logging: {error}");
    }

    let mut body = Vec::new();
    match cmd_line.input {
        Some(path) => body = std::fs::read(path)?,
        None => {
            std::io::stdin().read_to_end(&mut body)?;
        }
    }

    let family = cmd_line
        .family
        .into_family(cmd_line.wallet_provider.unwrap_or(conf.decoder.wallet_provider));
    let res = types::Response {
        response: body.into(),
        status_code: cmd_line.status_code,
    };

    match Gateway.handle_response(&res, &family) {
        Ok(decoded) => {
            println!("{}", serde_json::to_string_pretty(&decoded)?);
            Ok(())
        }
        Err(report) => {
            match report.current_context().api_exception() {
                Some(exception) => {
                    let rendered = serde_json::to_string_pretty(exception)
                        .unwrap_or_else(|_| exception.to_string());
                    eprintln!("{rendered}");
                }
                None => eprintln!("{report:?}"),
            }
            std::process::exit(1);
        }
    }
}
