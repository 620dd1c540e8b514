use clap::Parser;
use realm_search::config::toml_config::TomlConfig;
use realm_search::domain::ports::ConfigProvider;
use realm_search::utils::{logger, validation::Validate};
use realm_search::{
    CliConfig, ElectrumGateway, FailureReason, LookupClient, LookupOutcome, MockLookupClient,
    RealmsViewFlow, SearchRealmFlow, Settings,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting realm-search CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?.into_settings(),
        None => Settings::from(&cli),
    };

    let exit_code = if cli.mock {
        tracing::info!("🔌 Using the built-in mock gateway");
        run(Arc::new(MockLookupClient::demo()), &settings, &cli).await
    } else {
        run(Arc::new(ElectrumGateway::new(&settings)?), &settings, &cli).await
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<C: LookupClient + 'static>(client: Arc<C>, settings: &Settings, cli: &CliConfig) -> i32 {
    let outcome = if let Some(scripthash) = &cli.scripthash {
        let mut flow = RealmsViewFlow::new(client, settings.settle_delay());
        let store = flow.store();
        flow.change_scripthash(scripthash.clone());
        flow.load_requested();
        store.wait_for_terminal().await
    } else {
        let mut flow = SearchRealmFlow::new(client, settings.settle_delay());
        let store = flow.store();
        flow.change_name(cli.name.clone().unwrap_or_default());
        flow.lookup_requested();
        store.wait_for_terminal().await
    };

    report(&outcome)
}

fn report(outcome: &LookupOutcome) -> i32 {
    match outcome {
        LookupOutcome::Found(record) => {
            // 跟 UI 一樣把整包 JSON 原樣呈現
            match serde_json::to_string_pretty(record.as_json()) {
                Ok(body) => println!("✅ Realm found:\n{}", body),
                Err(_) => println!("✅ Realm found: {:?}", record),
            }
            0
        }
        LookupOutcome::Failed(reason) => {
            match reason {
                FailureReason::NotFound => {
                    println!("🔎 {}", reason.user_message());
                    0
                }
                FailureReason::EmptyQuery => {
                    eprintln!("❌ {}", reason.user_message());
                    1
                }
                FailureReason::RateLimited | FailureReason::TransientError => {
                    eprintln!("❌ {} Please try again later.", reason.user_message());
                    2
                }
            }
        }
        LookupOutcome::Idle | LookupOutcome::Pending => {
            eprintln!("❌ Lookup did not reach a terminal outcome");
            3
        }
    }
}
