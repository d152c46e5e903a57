use {
    crate::app::cli::{Args, Command},
    crate::constants::ASSET_PREVIEW,
    crate::libs::config::{load_env, Config},
    crate::libs::writing::{
        asset_info_rows, asset_row, asset_rows, balance_rows, cc, describe_error, transfer_rows,
        Colors,
    },
    crate::log,
    anyhow::{Context, Result},
    serde::Serialize,
    zano::{Transport, ZanoClient, NATIVE_ASSET_ID},
};

pub async fn init() -> Result<()> {
    load_env();
    let args = Args::parse_args();
    let cfg = Config::new().merge(args.wallet.clone(), args.daemon.clone(), args.timeout);
    cfg.validate()?;

    let client = match cfg.timeout() {
        Some(t) => ZanoClient::with_timeout(&cfg.wallet_rpc, &cfg.daemon_rpc, t),
        None => ZanoClient::new(&cfg.wallet_rpc, &cfg.daemon_rpc),
    }
    .context("building rpc client")?;
    log!("wallet {} | daemon {}", cfg.wallet_rpc, cfg.daemon_rpc);

    if let Err(e) = run(&client, &args.command(), args.json).await {
        log!(cc::RED, "{}", describe_error(&e));
        std::process::exit(1);
    }
    Ok(())
}

pub async fn run<T: Transport>(client: &ZanoClient<T>, command: &Command, json: bool) -> Result<()> {
    match command {
        Command::Balances => {
            let balances = client.get_balances().await?;
            emit(json, "Balances", &balances, || balance_rows(&balances))?;
        }
        Command::Assets { limit } => {
            let assets = client.list_assets().await?;
            let limit = limit.unwrap_or(*ASSET_PREVIEW);
            let title = format!("Assets ({})", assets.len());
            emit(json, &title, &assets, || asset_rows(&assets, limit))?;
        }
        Command::Asset { asset_id } => {
            let asset = client.get_asset_descriptor(asset_id).await?;
            emit(json, "Asset Details", &asset, || vec![asset_row(&asset)])?;
        }
        Command::Info { asset_id } => {
            let info = client.get_asset_info(asset_id).await?;
            emit(json, "Asset Info", &info, || asset_info_rows(asset_id, &info))?;
        }
        Command::Transfer {
            asset_id,
            address,
            amount,
        } => {
            log!(cc::YELLOW, "sending {} of {} to {}", amount, asset_id, address);
            let res = client.send_transfer(asset_id, address, *amount).await?;
            emit(json, "Transfer Result", &res, || transfer_rows(&res))?;
        }
        Command::CheckNative => {
            let listed = client.check_native_decimal_point().await?;
            if listed {
                log!(cc::LIGHT_GREEN, "native decimal point matches the catalog");
            } else {
                crate::warn!("native asset is not listed by the daemon, nothing to compare");
            }
        }
        Command::Demo => demo(client, json).await?,
    }
    Ok(())
}

/// Balances, the full asset list, then catalog details for every held
/// asset other than ZANO.
async fn demo<T: Transport>(client: &ZanoClient<T>, json: bool) -> Result<()> {
    let balances = client.get_balances().await?;
    emit(json, "Balances", &balances, || balance_rows(&balances))?;

    let assets = client.list_assets().await?;
    let title = format!("Assets ({})", assets.len());
    emit(json, &title, &assets, || asset_rows(&assets, *ASSET_PREVIEW))?;

    for b in balances.iter().filter(|b| b.asset_id != NATIVE_ASSET_ID) {
        let asset = client.get_asset_descriptor(&b.asset_id).await?;
        emit(json, "Asset Details", &asset, || vec![asset_row(&asset)])?;
    }
    Ok(())
}

fn emit<S, F>(json: bool, title: &str, value: &S, rows: F) -> Result<()>
where
    S: Serialize + ?Sized,
    F: FnOnce() -> Vec<String>,
{
    let mut out = Colors::new(std::io::stdout().lock());
    if json {
        out.rows(&[serde_json::to_string_pretty(value)?]);
    } else {
        out.title(title);
        out.rows(&rows());
    }
    Ok(())
}
