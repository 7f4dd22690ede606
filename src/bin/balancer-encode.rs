use std::io::{self, Read};

use alloy_primitives::Bytes;
use balancer_adapter::encoding::{
    dex_adapter::DexAdapter,
    evm::{
        approvals::UncheckedAllowances,
        balancer::{adapter::BalancerAdapter, call::SwapCall},
        config::{AddressConfig, ChainAddresses},
        simple_exchange::EVMSimpleExchange,
    },
    models::SwapIntent,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

mod lib {
    pub mod cli;
    pub mod logging;
}
use lib::cli::{Cli, Mode, Parser};

#[derive(Deserialize)]
struct DecodeInput {
    data: Bytes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());
    lib::logging::setup_logging(&log_level);

    // Read from stdin until EOF
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read from stdin: {}", e))?;

    if buffer.trim().is_empty() {
        eprintln!("Error: No input provided");
        std::process::exit(1);
    }

    let config = AddressConfig::new(cli.config.clone())?;
    let addresses = config.for_chain(&cli.chain)?;
    info!(chain = %cli.chain, mode = ?cli.mode, "encoding input");

    let output = match cli.mode {
        Mode::Adapter | Mode::Direct => encode_intent(&buffer, cli.mode, addresses).await?,
        Mode::Decode => decode_call(&buffer)?,
    };

    println!(
        "{}",
        serde_json::to_string(&output).map_err(|e| format!("Failed to serialize output: {}", e))?
    );

    Ok(())
}

async fn encode_intent(
    input: &str,
    mode: Mode,
    addresses: &ChainAddresses,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut input: Value = serde_json::from_str(input)?;
    if let Some(data) = input
        .get_mut("data")
        .and_then(Value::as_object_mut)
    {
        data.entry("exchangeProxy")
            .or_insert_with(|| json!(addresses.exchange_proxy));
    }
    let intent: SwapIntent = serde_json::from_value(input)?;

    let simple_exchange = EVMSimpleExchange::new(addresses.augustus_address()?, UncheckedAllowances);
    let adapter = BalancerAdapter::new(simple_exchange);

    let output = if mode == Mode::Direct {
        serde_json::to_value(adapter.simple_param(&intent).await?)?
    } else {
        serde_json::to_value(adapter.adapter_param(&intent)?)?
    };
    Ok(output)
}

fn decode_call(input: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let input: DecodeInput = serde_json::from_str(input)?;
    let call = SwapCall::decode(&input.data)?;

    let mut output = json!({
        "function": call.function().name(),
        "signature": call.function().signature(),
        "swaps": call.swaps(),
    });
    match &call {
        SwapCall::NativeIn { dest_token, dest_amount, .. } => {
            output["destToken"] = json!(dest_token);
            output["destAmount"] = json!(dest_amount.to_string());
        }
        SwapCall::NativeOut { src_token, src_amount, dest_amount, .. } => {
            output["srcToken"] = json!(src_token);
            output["srcAmount"] = json!(src_amount.to_string());
            output["destAmount"] = json!(dest_amount.to_string());
        }
        SwapCall::TokenToToken { src_token, dest_token, src_amount, dest_amount, .. } => {
            output["srcToken"] = json!(src_token);
            output["destToken"] = json!(dest_token);
            output["srcAmount"] = json!(src_amount.to_string());
            output["destAmount"] = json!(dest_amount.to_string());
        }
    }
    Ok(output)
}
